//! Move generation and move application.
//!
//! A game has two phases, derived from the board alone:
//! - **Opening** (at most one empty cell): Black removes one of four fixed
//!   pieces, then White removes a piece next to the resulting hole.
//! - **Midgame**: a piece jumps over an orthogonally adjacent opponent piece
//!   into the empty cell beyond it, and may keep jumping in the same
//!   direction. Every prefix of such a chain is a separate move.
//!
//! Generation only ever yields legal moves. [`apply_move`] validates whatever
//! it is given and reports the first rule broken as an [`InvalidMove`].

use derive_more::{Display, Error};

use crate::board::{Board, Move, Side};
use crate::constants::DIRECTIONS;

/// The rule a rejected move broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Violation {
    #[display("endpoint off the board")]
    OutOfBounds,
    #[display("origin does not hold the mover's piece")]
    NotOwned,
    #[display("pieces can only be removed during the opening")]
    NotOpening,
    #[display("endpoints are not on one row or column")]
    NotStraight,
    #[display("jump distance must be even")]
    OddDistance,
    #[display("destination is occupied")]
    Occupied,
    #[display("jumped cell does not hold an opponent piece")]
    NothingToCapture,
    #[display("intermediate landing cell is occupied")]
    BlockedLanding,
}

/// A move the rules do not allow for the given side and board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid move {mv} by {side}: {violation}")]
pub struct InvalidMove {
    pub mv: Move,
    pub side: Side,
    pub violation: Violation,
}

/// All legal moves for `side`, in generation order.
///
/// During the opening Black always receives the first-move set and White the
/// second-move set.
pub fn generate_moves(board: &Board, side: Side) -> Vec<Move> {
    if board.is_opening() {
        match side {
            Side::Black => first_moves(board),
            Side::White => second_moves(board),
        }
    } else {
        capture_moves(board, side)
    }
}

/// Black's opening choices: both far corners and both center cells.
pub fn first_moves(board: &Board) -> Vec<Move> {
    let last = board.size() - 1;
    let half = board.half();
    vec![
        Move::vacate(0, 0),
        Move::vacate(last, last),
        Move::vacate(half, half),
        Move::vacate(half - 1, half - 1),
    ]
}

/// White's opening choices: the pieces next to the hole Black made.
pub fn second_moves(board: &Board) -> Vec<Move> {
    let last = board.size() - 1;
    let half = board.half();
    if board.get(0, 0).is_none() {
        return vec![Move::vacate(0, 1), Move::vacate(1, 0)];
    }
    if board.get(last, last).is_none() {
        return vec![Move::vacate(last, last - 1), Move::vacate(last - 1, last)];
    }
    let pos = if board.get(half - 1, half - 1).is_none() {
        half - 1
    } else {
        half
    };
    // half - 1 is only picked when it is not the (filled) corner, so pos >= 1
    vec![
        Move::vacate(pos, pos - 1),
        Move::vacate(pos + 1, pos),
        Move::vacate(pos, pos + 1),
        Move::vacate(pos - 1, pos),
    ]
}

/// Midgame moves for `side`: every capture chain prefix from every piece.
pub fn capture_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            if board.get(row, col) != Some(side) {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                push_chain(board, side, row, col, dr, dc, &mut moves);
            }
        }
    }
    moves
}

/// Walk one ray from `(row, col)`, pushing a move for each successful
/// opponent-then-empty step until the chain breaks.
fn push_chain(
    board: &Board,
    side: Side,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    out: &mut Vec<Move>,
) {
    let opponent = Some(side.opponent());
    let (r, c) = (row as isize, col as isize);
    let mut factor = 1;
    loop {
        let (over_r, over_c) = (r + factor * dr, c + factor * dc);
        let (land_r, land_c) = (r + (factor + 1) * dr, c + (factor + 1) * dc);
        if !(board.contains(over_r, over_c, opponent) && board.contains(land_r, land_c, None)) {
            break;
        }
        out.push(Move::new(row, col, land_r as usize, land_c as usize));
        factor += 2;
    }
}

/// Apply `mv` for `side`, returning the resulting board.
///
/// The input board is left untouched.
pub fn apply_move(board: &Board, side: Side, mv: Move) -> Result<Board, InvalidMove> {
    let invalid = |violation| InvalidMove { mv, side, violation };
    let size = board.size();
    if mv.r1 >= size || mv.c1 >= size || mv.r2 >= size || mv.c2 >= size {
        return Err(invalid(Violation::OutOfBounds));
    }
    if board.get(mv.r1, mv.c1) != Some(side) {
        return Err(invalid(Violation::NotOwned));
    }

    let mut next = board.clone();
    if mv.is_vacate() {
        if !board.is_opening() {
            return Err(invalid(Violation::NotOpening));
        }
        next.set(mv.r1, mv.c1, None);
        return Ok(next);
    }

    if mv.r1 != mv.r2 && mv.c1 != mv.c2 {
        return Err(invalid(Violation::NotStraight));
    }
    let dist = mv.distance();
    if dist % 2 != 0 {
        return Err(invalid(Violation::OddDistance));
    }
    if board.get(mv.r2, mv.c2).is_some() {
        return Err(invalid(Violation::Occupied));
    }

    let dr = (mv.r2 as isize - mv.r1 as isize).signum();
    let dc = (mv.c2 as isize - mv.c1 as isize).signum();
    let (mut r, mut c) = (mv.r1 as isize, mv.c1 as isize);
    let opponent = Some(side.opponent());
    let jumps = dist / 2;
    next.set(mv.r1, mv.c1, None);
    for i in 0..jumps {
        let (over_r, over_c) = ((r + dr) as usize, (c + dc) as usize);
        if next.get(over_r, over_c) != opponent {
            return Err(invalid(Violation::NothingToCapture));
        }
        next.set(over_r, over_c, None);
        r += 2 * dr;
        c += 2 * dc;
        if i + 1 < jumps && next.get(r as usize, c as usize).is_some() {
            return Err(invalid(Violation::BlockedLanding));
        }
    }
    next.set(mv.r2, mv.c2, Some(side));
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_first_moves_on_pristine_board() {
        let moves = generate_moves(&Board::new(8), Side::Black);
        assert_eq!(
            moves,
            vec![
                Move::vacate(0, 0),
                Move::vacate(7, 7),
                Move::vacate(4, 4),
                Move::vacate(3, 3),
            ]
        );
    }

    #[test]
    fn test_second_moves_bottom_right_corner() {
        let b = apply_move(&Board::new(6), Side::Black, Move::vacate(5, 5)).unwrap();
        let moves = generate_moves(&b, Side::White);
        assert_eq!(moves, vec![Move::vacate(5, 4), Move::vacate(4, 5)]);
    }

    #[test]
    fn test_second_moves_center() {
        let b = apply_move(&Board::new(6), Side::Black, Move::vacate(2, 2)).unwrap();
        let moves = generate_moves(&b, Side::White);
        assert_eq!(
            moves,
            vec![
                Move::vacate(2, 1),
                Move::vacate(3, 2),
                Move::vacate(2, 3),
                Move::vacate(1, 2),
            ]
        );

        let b = apply_move(&Board::new(6), Side::Black, Move::vacate(3, 3)).unwrap();
        let moves = generate_moves(&b, Side::White);
        assert_eq!(moves[0], Move::vacate(3, 2));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_second_moves_are_white_pieces() {
        for size in [4, 5, 6, 8] {
            let pristine = Board::new(size);
            for first in first_moves(&pristine) {
                let b = apply_move(&pristine, Side::Black, first).unwrap();
                for second in generate_moves(&b, Side::White) {
                    assert!(
                        apply_move(&b, Side::White, second).is_ok(),
                        "size {size}: {first} then {second}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_capture_chain_prefixes() {
        let b = board(&[
            "BW.W.",
            ".....",
            ".....",
            ".....",
            ".....",
        ]);
        let moves = generate_moves(&b, Side::Black);
        assert_eq!(moves, vec![Move::new(0, 0, 0, 2), Move::new(0, 0, 0, 4)]);
    }

    #[test]
    fn test_chain_stops_at_gap() {
        let b = board(&[
            "BW..W.",
            "......",
            "......",
            "......",
            "......",
            "......",
        ]);
        let moves = generate_moves(&b, Side::Black);
        assert_eq!(moves, vec![Move::new(0, 0, 0, 2)]);
    }

    #[test]
    fn test_direction_order() {
        let b = board(&[
            ".....",
            "..W..",
            ".WBW.",
            "..W..",
            ".....",
        ]);
        let moves = generate_moves(&b, Side::Black);
        assert_eq!(
            moves,
            vec![
                Move::new(2, 2, 0, 2),
                Move::new(2, 2, 2, 4),
                Move::new(2, 2, 4, 2),
                Move::new(2, 2, 2, 0),
            ]
        );
    }

    #[test]
    fn test_no_moves_when_blocked() {
        let b = board(&["BB..", "BB..", "....", "...W"]);
        assert!(generate_moves(&b, Side::Black).is_empty());
        assert!(generate_moves(&b, Side::White).is_empty());
    }

    #[test]
    fn test_apply_double_jump() {
        let b = board(&[
            "BW.W.",
            ".....",
            ".....",
            ".....",
            "....W",
        ]);
        let next = apply_move(&b, Side::Black, Move::new(0, 0, 0, 4)).unwrap();
        assert_eq!(
            next,
            board(&[
                "....B",
                ".....",
                ".....",
                ".....",
                "....W",
            ])
        );
        // Input untouched
        assert_eq!(b.get(0, 1), Some(Side::White));
    }

    #[test]
    fn test_apply_vertical_jumps() {
        let down = apply_move(&board(&["B..", "W..", "..."]), Side::Black, Move::new(0, 0, 2, 0)).unwrap();
        assert_eq!(down, board(&["...", "...", "B.."]));
        let up = apply_move(&board(&["...", "W..", "B.."]), Side::Black, Move::new(2, 0, 0, 0)).unwrap();
        assert_eq!(up, board(&["B..", "...", "..."]));
    }

    #[test]
    fn test_apply_violations() {
        let b = board(&[
            "BWB.",
            "W..B",
            "....",
            "...W",
        ]);
        let cases = [
            (Move::new(0, 0, 0, 4), Violation::OutOfBounds),
            (Move::new(0, 1, 0, 3), Violation::NotOwned),
            (Move::vacate(0, 0), Violation::NotOpening),
            (Move::new(0, 0, 2, 2), Violation::NotStraight),
            (Move::new(0, 0, 0, 3), Violation::OddDistance),
            (Move::new(0, 0, 0, 2), Violation::Occupied),
            (Move::new(1, 3, 1, 1), Violation::NothingToCapture),
        ];
        for (mv, violation) in cases {
            let err = apply_move(&b, Side::Black, mv).unwrap_err();
            assert_eq!(err.violation, violation, "{mv}");
            assert_eq!(err.mv, mv);
            assert_eq!(err.side, Side::Black);
        }
    }

    #[test]
    fn test_apply_blocked_landing() {
        let b = board(&["BWBW.", ".....", ".....", ".....", "....."]);
        let err = apply_move(&b, Side::Black, Move::new(0, 0, 0, 4)).unwrap_err();
        assert_eq!(err.violation, Violation::BlockedLanding);
    }

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMove {
            mv: Move::new(0, 0, 0, 2),
            side: Side::White,
            violation: Violation::Occupied,
        };
        assert_eq!(
            err.to_string(),
            "invalid move (0, 0, 0, 2) by W: destination is occupied"
        );
    }
}
