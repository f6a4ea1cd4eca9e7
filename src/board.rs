//! Board state representation and move application

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Symbols;
use crate::error::{Error, Result};

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Max,
    Min,
}

impl Cell {
    /// Owner of the cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Max => Some(Player::Max),
            Cell::Min => Some(Player::Min),
        }
    }
}

/// One of the two adversaries.
///
/// `Max` is the side the search scores positively for, `Min` its opponent.
/// Which on-screen symbol each side plays is a [`Symbols`] concern, not a
/// board concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Max => Cell::Max,
            Player::Min => Cell::Min,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Max => "maximizer",
            Player::Min => "minimizer",
        })
    }
}

/// A (row, col) destination on the grid.
///
/// Ordered by `(row, col)` so that sorted move lists coincide with row-major
/// enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Owned R×C grid of cell ownership.
///
/// A board is a pure value: [`Board::apply`] returns a fresh board and never
/// touches the receiver, so sibling search branches can hold the same parent
/// board without aliasing.
///
/// # Examples
///
/// ```
/// use lineup::{Board, Cell, Move, Player};
///
/// let board = Board::new(3, 3);
/// let next = board.apply(Move::new(1, 1), Player::Max)?;
///
/// // The original board is unchanged.
/// assert_eq!(board.cell(1, 1), Some(Cell::Empty));
/// assert_eq!(next.cell(1, 1), Some(Cell::Max));
/// # Ok::<(), lineup::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Dimension limits are enforced by
    /// [`EngineConfig::validate`](crate::config::EngineConfig::validate);
    /// the board itself only requires non-zero extents.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "board extents must be non-zero");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Bounds-checked cell read
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Apply a move for `player` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MoveOutOfBounds`] or [`Error::CellOccupied`] without
    /// modifying the receiver.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move, player: Player) -> Result<Board> {
        match self.cell(mv.row, mv.col) {
            None => Err(Error::MoveOutOfBounds {
                row: mv.row,
                col: mv.col,
                rows: self.rows,
                cols: self.cols,
            }),
            Some(Cell::Empty) => {
                let mut next = self.clone();
                let idx = next.index(mv.row, mv.col);
                next.cells[idx] = player.to_cell();
                Ok(next)
            }
            Some(_) => Err(Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            }),
        }
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.positions()
            .filter(move |&mv| self.cells[self.index(mv.row, mv.col)] == Cell::Empty)
    }

    /// Cells owned by `player`, in row-major order
    pub fn cells_of(&self, player: Player) -> impl Iterator<Item = Move> + '_ {
        let target = player.to_cell();
        self.positions()
            .filter(move |&mv| self.cells[self.index(mv.row, mv.col)] == target)
    }

    /// Occupied cells with their owners, in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Move, Player)> + '_ {
        self.positions().filter_map(move |mv| {
            self.cells[self.index(mv.row, mv.col)]
                .player()
                .map(|p| (mv, p))
        })
    }

    /// Whether `player` owns at least one cell
    pub fn has_any(&self, player: Player) -> bool {
        self.cells.contains(&player.to_cell())
    }

    fn positions(&self) -> impl Iterator<Item = Move> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Move::new(row, col)))
    }

    /// Parse a board from one string per row.
    ///
    /// Whitespace inside a row is ignored. The player symbols come from
    /// `symbols`; `'#'`, `'.'` and `'_'` all denote an empty cell. Every row
    /// must have as many cells as the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRowLength`] on ragged input and
    /// [`Error::InvalidCellCharacter`] on an unrecognized symbol.
    pub fn from_rows(rows: &[&str], symbols: &Symbols) -> Result<Board> {
        debug_assert!(!rows.is_empty(), "board literal needs at least one row");
        let parsed: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        let cols = parsed[0].len();

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row_index, row) in parsed.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidRowLength {
                    row_index,
                    got: row.len(),
                    expected: cols,
                });
            }
            for (col, &character) in row.iter().enumerate() {
                cells.push(match character {
                    '#' | '.' | '_' => Cell::Empty,
                    c if c == symbols.maximizer => Cell::Max,
                    c if c == symbols.minimizer => Cell::Min,
                    _ => {
                        return Err(Error::InvalidCellCharacter {
                            character,
                            row: row_index,
                            col,
                        })
                    }
                });
            }
        }

        Ok(Board {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Render the grid with row and column indices. A debug convenience for
    /// terminal play, not a wire format.
    pub fn render(&self, symbols: &Symbols) -> String {
        let mut out = String::new();
        out.push_str("    ");
        for col in 0..self.cols {
            out.push_str(&format!("{col} "));
        }
        out.push('\n');
        out.push_str(&format!("   +{}\n", "-".repeat(self.cols * 2)));
        for row in 0..self.rows {
            out.push_str(&format!("{row:>2} | "));
            for col in 0..self.cols {
                out.push(match self.cells[self.index(row, col)] {
                    Cell::Empty => '.',
                    Cell::Max => symbols.maximizer,
                    Cell::Min => symbols.minimizer,
                });
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
