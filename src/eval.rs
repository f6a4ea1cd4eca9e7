//! Position scoring from the maximizing player's perspective

use crate::board::{Board, Move, Player};
use crate::config::Variant;
use crate::lines::{open_line_count, LineDetector, RunOutcome};

/// Base score of a decided game; depth remaining is added on top so that
/// outcomes reached earlier in the search score more extremely.
pub const WIN_SCORE: i32 = 99;

/// Maps a board (or a just-completed move) plus remaining search depth to a
/// score from the maximizer's fixed perspective.
///
/// Terminal scores are `99 + depth` when the outcome favors the maximizer,
/// `-99 + depth` when it favors the minimizer, and `0` for a draw. The
/// asymmetry is deliberate and preserved from the reference scoring: wins
/// prefer shallow (fast) lines, while deeper losses are penalized slightly
/// less than immediate ones.
///
/// In the classic variant a completed run favors the run-former; in the
/// misère variant it favors the run-former's opponent. The search backup
/// rule never changes between variants; the sign flip lives entirely here.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    variant: Variant,
    detector: LineDetector,
}

impl Evaluator {
    pub fn new(variant: Variant, run_length: usize) -> Self {
        Evaluator {
            variant,
            detector: LineDetector::new(run_length),
        }
    }

    pub fn detector(&self) -> &LineDetector {
        &self.detector
    }

    /// Score a board using the full-board terminal scan.
    pub fn estimate(&self, board: &Board, depth_remaining: usize) -> i32 {
        self.score_outcome(self.detector.outcome(board), board, depth_remaining)
    }

    /// Score a board whose most recent move is known, using the O(run-length)
    /// incremental terminal test. Agrees with [`estimate`] on every reachable
    /// board.
    ///
    /// [`estimate`]: Evaluator::estimate
    pub fn estimate_after(&self, board: &Board, last: Move, depth_remaining: usize) -> i32 {
        self.score_outcome(self.detector.outcome_after(board, last), board, depth_remaining)
    }

    /// Score an already-classified board.
    pub fn score_outcome(&self, outcome: RunOutcome, board: &Board, depth_remaining: usize) -> i32 {
        match outcome {
            RunOutcome::Run(former) => {
                if self.run_favors_maximizer(former) {
                    WIN_SCORE + depth_remaining as i32
                } else {
                    -WIN_SCORE + depth_remaining as i32
                }
            }
            RunOutcome::Draw => 0,
            RunOutcome::Ongoing => self.heuristic(board),
        }
    }

    /// Depth-exhausted heuristic. The classic variant uses the open-line
    /// differential; the misère variant has no informative cheap heuristic
    /// and returns a constant, relying on search reaching true terminals on
    /// practically sized boards.
    fn heuristic(&self, board: &Board) -> i32 {
        match self.variant {
            Variant::Classic => {
                open_line_count(board, Player::Max) - open_line_count(board, Player::Min)
            }
            Variant::Misere => 1,
        }
    }

    fn run_favors_maximizer(&self, former: Player) -> bool {
        match self.variant {
            Variant::Classic => former == Player::Max,
            Variant::Misere => former == Player::Min,
        }
    }
}
