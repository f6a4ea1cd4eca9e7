//! Run detection along the four scan axes

use crate::board::{Board, Cell, Move, Player};

/// The four scan axes: vertical, horizontal, and the two diagonals.
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Terminal classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No qualifying run yet and empty cells remain
    Ongoing,
    /// The named player completed a run of qualifying length. Whether that
    /// wins or loses the game is the evaluator's call, not this module's.
    Run(Player),
    /// Board full with no qualifying run
    Draw,
}

/// Detects runs of a configured length through any cell, in any of the four
/// axis directions.
#[derive(Debug, Clone, Copy)]
pub struct LineDetector {
    run_length: usize,
}

impl LineDetector {
    pub fn new(run_length: usize) -> Self {
        LineDetector { run_length }
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Incremental terminal test after `last` was played: only runs through
    /// the last move are possible, so four O(run-length) axis walks suffice.
    ///
    /// Must classify every reachable board exactly like [`outcome`]; the
    /// full-board scan is the reference the tests hold this against.
    ///
    /// [`outcome`]: LineDetector::outcome
    pub fn outcome_after(&self, board: &Board, last: Move) -> RunOutcome {
        if let Some(owner) = board.cell(last.row, last.col).and_then(Cell::player) {
            if self.has_run_through(board, last, owner) {
                return RunOutcome::Run(owner);
            }
        }
        if board.is_full() {
            RunOutcome::Draw
        } else {
            RunOutcome::Ongoing
        }
    }

    /// Full-board reference scan: the first occupied cell in row-major order
    /// that sits on a qualifying run names the run-former.
    pub fn outcome(&self, board: &Board) -> RunOutcome {
        for (mv, owner) in board.occupied_cells() {
            if self.has_run_through(board, mv, owner) {
                return RunOutcome::Run(owner);
            }
        }
        if board.is_full() {
            RunOutcome::Draw
        } else {
            RunOutcome::Ongoing
        }
    }

    /// Length of the longest run through `at` over all four axes
    pub fn run_through(&self, board: &Board, at: Move, owner: Player) -> usize {
        AXES.iter()
            .map(|&axis| self.run_along(board, at, owner, axis))
            .max()
            .unwrap_or(1)
    }

    fn has_run_through(&self, board: &Board, at: Move, owner: Player) -> bool {
        AXES.iter()
            .any(|&axis| self.run_along(board, at, owner, axis) >= self.run_length)
    }

    fn run_along(&self, board: &Board, at: Move, owner: Player, (dr, dc): (isize, isize)) -> usize {
        1 + count_direction(board, at, owner, dr, dc) + count_direction(board, at, owner, -dr, -dc)
    }
}

/// Count consecutive `owner` cells from `from` (exclusive) along one
/// direction, stopping at the board edge or any other cell value.
fn count_direction(board: &Board, from: Move, owner: Player, dr: isize, dc: isize) -> usize {
    let target = owner.to_cell();
    let mut len = 0;
    let mut row = from.row as isize + dr;
    let mut col = from.col as isize + dc;
    while row >= 0
        && col >= 0
        && board.in_bounds(row as usize, col as usize)
        && board.cell(row as usize, col as usize) == Some(target)
    {
        len += 1;
        row += dr;
        col += dc;
    }
    len
}

/// Marks `player` holds on scoring lines that carry no opposing mark.
///
/// The scoring lines are the R rows, the C columns, and the two corner
/// diagonals of length `min(R, C)`, the classic heuristic's line set.
/// A line blocked by the opponent contributes nothing.
pub fn open_line_count(board: &Board, player: Player) -> i32 {
    let rows = board.rows();
    let cols = board.cols();
    let mut total = 0;
    for row in 0..rows {
        total += line_score(board, (row as isize, 0), (0, 1), cols, player);
    }
    for col in 0..cols {
        total += line_score(board, (0, col as isize), (1, 0), rows, player);
    }
    let diagonal = rows.min(cols);
    total += line_score(board, (0, 0), (1, 1), diagonal, player);
    total += line_score(board, (0, cols as isize - 1), (1, -1), diagonal, player);
    total
}

fn line_score(
    board: &Board,
    start: (isize, isize),
    step: (isize, isize),
    len: usize,
    player: Player,
) -> i32 {
    let mut mine = 0;
    let (mut row, mut col) = start;
    for _ in 0..len {
        match board
            .cell(row as usize, col as usize)
            .and_then(Cell::player)
        {
            Some(p) if p == player => mine += 1,
            Some(_) => return 0,
            None => {}
        }
        row += step.0;
        col += step.1;
    }
    mine
}
