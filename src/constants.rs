//! Constants for board geometry, search defaults, and evaluation weights.
//!
//! Board size and search depth are chosen at runtime (see the `play` and
//! `bench` subcommands); the values here are the defaults the binary falls
//! back to.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_SIZE: usize = 8;

/// Smallest playable board. On 2x2 the opening neighbours of the center
/// fall off the board.
pub const MIN_SIZE: usize = 3;

/// Ray directions as (row delta, column delta).
/// Order: North, East, South, West
pub const DIRECTIONS: [(isize, isize); 4] = [
    (-1, 0), // North (up one row)
    (0, 1),  // East (right one column)
    (1, 0),  // South (down one row)
    (0, -1), // West (left one column)
];

// =============================================================================
// Cell Symbols
// =============================================================================

/// Black piece (moves first).
pub const SYMBOL_BLACK: char = 'B';

/// White piece.
pub const SYMBOL_WHITE: char = 'W';

/// Empty cell.
pub const SYMBOL_EMPTY: char = '.';

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth for the minimax and alpha-beta players.
pub const DEFAULT_DEPTH: u32 = 2;

/// Weight on the evaluating side's move count used by the minimax player.
pub const MINIMAX_MOBILITY_WEIGHT: i64 = 3;

/// Weight on the evaluating side's move count used by the alpha-beta player.
pub const ALPHA_BETA_MOBILITY_WEIGHT: i64 = 4;

/// Default number of games played by the `play` and `bench` subcommands.
pub const DEFAULT_GAMES: usize = 1;
