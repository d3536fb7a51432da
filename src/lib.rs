//! Konane-Rust: a jump-capture board game engine with search-based players.
//!
//! Pieces fill an NxN board in a checkerboard pattern. After a two-move
//! opening that opens holes near a corner or the center, players alternate
//! jumping over opponent pieces in straight lines. A player with no legal
//! jump loses.
//!
//! ## Modules
//!
//! - [`constants`] - Board defaults, direction table, and search parameters
//! - [`board`] - Board state, sides, and moves
//! - [`rules`] - Move generation and move application
//! - [`eval`] - Mobility evaluation
//! - [`search`] - Fixed-depth minimax and alpha-beta search
//! - [`player`] - Player trait and its implementations
//! - [`game`] - Game driver, records, and timing
//!
//! ## Example
//!
//! ```
//! use konane_rust::board::{Board, Side};
//! use konane_rust::player::{AlphaBetaPlayer, Player};
//! use konane_rust::rules::{apply_move, generate_moves};
//!
//! let board = Board::new(6);
//! assert_eq!(generate_moves(&board, Side::Black).len(), 4);
//!
//! let mut player = AlphaBetaPlayer::new(Side::Black, 2);
//! let mv = player.get_move(&board).unwrap().expect("a move is available");
//! let next = apply_move(&board, Side::Black, mv).unwrap();
//! assert_eq!(next.count(None), 1);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
