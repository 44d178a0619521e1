//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;

/// Board side length. The board never changes size.
pub const SIZE: usize = 3;

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// X (moves first).
    #[display("X")]
    X,
    /// O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark as a static string (`"X"` or `"O"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// True if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Marked)
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        cell.mark()
    }
}

/// A validated board coordinate.
///
/// Both `row` and `col` are always within `0..SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// The middle cell.
    pub const CENTER: Coord = Coord::at(1, 1);

    /// Creates a coordinate, or `None` if either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / SIZE, index % SIZE)
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE * SIZE).map(|index| Coord::at(index / SIZE, index % SIZE))
    }
}

/// Failure to parse a `row,col` pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    /// Input was not two comma-separated numbers.
    #[display("Expected `row,col`, got {:?}", _0)]
    Malformed(#[error(not(source))] String),
    /// One of the indices is off the board.
    #[display("Coordinate ({row}, {col}) is off the board")]
    OffBoard {
        /// Parsed row.
        row: usize,
        /// Parsed column.
        col: usize,
    },
}

/// Parses `row,col` without checking the board bounds.
pub fn parse_pair(s: &str) -> Result<(usize, usize), ParseMoveError> {
    let malformed = || ParseMoveError::Malformed(s.to_string());
    let (row, col) = s.trim().split_once(',').ok_or_else(malformed)?;
    let row = row.trim().parse().map_err(|_| malformed())?;
    let col = col.trim().parse().map_err(|_| malformed())?;
    Ok((row, col))
}

impl FromStr for Coord {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = parse_pair(s)?;
        Coord::new(row, col).ok_or(ParseMoveError::OffBoard { row, col })
    }
}

/// One of the eight three-in-a-row lines.
///
/// Declaration order is evaluation order: rows top to bottom, columns left
/// to right, then the main and anti diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// (0,0) to (2,2).
    #[display("main diagonal")]
    MainDiagonal,
    /// (0,2) to (2,0).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// The three coordinates on this line.
    pub fn cells(self) -> [Coord; 3] {
        match self {
            Line::TopRow => [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
            Line::MiddleRow => [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
            Line::BottomRow => [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
            Line::LeftColumn => [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
            Line::CenterColumn => [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
            Line::RightColumn => [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
            Line::MainDiagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            Line::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }

    /// True if `coord` lies on this line.
    pub fn contains(self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.rows[coord.row][coord.col]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.rows[coord.row][coord.col] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.rows = Default::default();
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.rows
    }

    /// Iterates over every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(|coord| (coord, self.get(coord)))
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Marked(mark))
            .count()
    }

    /// Counts empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell.mark().map_or(" ", Mark::as_str))?;
            }
        }
        Ok(())
    }
}
