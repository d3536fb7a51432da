//! Board representation.
//!
//! A [`Board`] is an NxN grid of cells, each holding a Black piece, a White
//! piece, or nothing. Boards are never changed once built: applying a move
//! (see [`crate::rules::apply_move`]) copies the grid and returns a new board.

use std::fmt;

use derive_more::{Display, Error};

use crate::constants::{MIN_SIZE, SYMBOL_BLACK, SYMBOL_EMPTY, SYMBOL_WHITE};

/// One of the two players. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::Black => SYMBOL_BLACK,
            Side::White => SYMBOL_WHITE,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell (`None` = empty).
pub type Cell = Option<Side>;

/// A move `(r1, c1, r2, c2)`.
///
/// When both endpoints coincide the move vacates that cell (only legal during
/// the opening). Otherwise the piece at `(r1, c1)` jumps in a straight line to
/// `(r2, c2)`, capturing every second cell on the way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub r1: usize,
    pub c1: usize,
    pub r2: usize,
    pub c2: usize,
}

impl Move {
    pub fn new(r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        Self { r1, c1, r2, c2 }
    }

    /// An opening move that removes the piece at `(row, col)`.
    pub fn vacate(row: usize, col: usize) -> Self {
        Self::new(row, col, row, col)
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.r1, self.c1)
    }

    pub fn destination(&self) -> (usize, usize) {
        (self.r2, self.c2)
    }

    /// Straight-line distance `|(r2 - r1) + (c2 - c1)|`.
    pub fn distance(&self) -> usize {
        let dr = self.r2 as isize - self.r1 as isize;
        let dc = self.c2 as isize - self.c1 as isize;
        (dr + dc).unsigned_abs()
    }

    pub fn is_vacate(&self) -> bool {
        self.r1 == self.r2 && self.c1 == self.c2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r1, self.c1, self.r2, self.c2)
    }
}

/// Error building a board from text rows.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Fewer rows than the smallest playable board.
    #[display("board needs at least three rows, got {_0}")]
    TooSmall(#[error(not(source))] usize),
    /// A row whose length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A character that is not a piece or an empty cell.
    #[display("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    half: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create the starting position: every cell filled, alternating Black
    /// and White from the top-left corner.
    ///
    /// # Panics
    /// If `size` is below [`MIN_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(size >= MIN_SIZE, "board size must be at least {MIN_SIZE}");
        let mut cells = Vec::with_capacity(size * size);
        let mut value = Side::Black;
        for _row in 0..size {
            for _col in 0..size {
                cells.push(Some(value));
                value = value.opponent();
            }
            // An even-length row ends on the colour it started with
            if size % 2 == 0 {
                value = value.opponent();
            }
        }
        Self {
            size,
            half: size / 2,
            cells,
        }
    }

    /// Build a board from rows of `B`, `W` and `.` characters.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseBoardError> {
        let size = rows.len();
        if size < MIN_SIZE {
            return Err(ParseBoardError::TooSmall(size));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(ParseBoardError::NotSquare {
                    row,
                    len,
                    expected: size,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    SYMBOL_BLACK => Some(Side::Black),
                    SYMBOL_WHITE => Some(Side::White),
                    SYMBOL_EMPTY => None,
                    _ => return Err(ParseBoardError::UnknownSymbol { symbol, row, col }),
                };
                cells.push(cell);
            }
        }
        Ok(Self {
            size,
            half: size / 2,
            cells,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `floor(size / 2)`, used to locate the center cells.
    pub fn half(&self) -> usize {
        self.half
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// The cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// Bounds-checked comparison: false whenever `(row, col)` is off the board.
    pub fn contains(&self, row: isize, col: isize, cell: Cell) -> bool {
        self.in_bounds(row, col) && self.get(row as usize, col as usize) == cell
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// True during the first two moves of a game (at most one empty cell).
    pub fn is_opening(&self) -> bool {
        self.count(None) <= 1
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.idx(row, col);
        self.cells[i] = cell;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row} ")?;
            for col in 0..self.size {
                let ch = match self.get(row, col) {
                    Some(side) => side.symbol(),
                    None => SYMBOL_EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
