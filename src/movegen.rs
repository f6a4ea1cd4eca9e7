//! Legal-move generation under the two placement policies

use clap::ValueEnum;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Cell, Move, Player};

/// Offsets of the 8-neighborhood around a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which empty cells a player may mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum MovePolicy {
    /// Every empty cell is a legal destination.
    Exhaustive,
    /// Destinations are restricted to the 8-neighborhood of the mover's own
    /// marks. A player with no marks yet may play anywhere.
    Adjacency,
}

/// Enumerates legal destination cells for a player.
///
/// Results are deduplicated and sorted by `(row, col)`, so enumeration order
/// is deterministic and matches row-major order; search tie-breaking and
/// test traces rely on this.
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator {
    policy: MovePolicy,
}

impl MoveGenerator {
    pub fn new(policy: MovePolicy) -> Self {
        MoveGenerator { policy }
    }

    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    /// All legal destinations for `player` on `board`.
    ///
    /// Under the adjacency policy the result can be empty while empty cells
    /// remain elsewhere; see [`MoveGenerator::is_stalled`].
    pub fn legal_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        match self.policy {
            MovePolicy::Exhaustive => board.empty_cells().collect(),
            MovePolicy::Adjacency => {
                if !board.has_any(player) {
                    // First move: anywhere.
                    return board.empty_cells().collect();
                }
                let mut destinations = FxHashSet::default();
                for anchor in board.cells_of(player) {
                    for neighbor in neighbors(board, anchor) {
                        if board.cell(neighbor.row, neighbor.col) == Some(Cell::Empty) {
                            destinations.insert(neighbor);
                        }
                    }
                }
                let mut moves: Vec<Move> = destinations.into_iter().collect();
                moves.sort_unstable();
                moves
            }
        }
    }

    /// Whether the policy permits `player` to play at `mv`. Bounds and
    /// occupancy are the board's concern; this checks only the placement
    /// restriction.
    pub fn permits(&self, board: &Board, player: Player, mv: Move) -> bool {
        match self.policy {
            MovePolicy::Exhaustive => true,
            MovePolicy::Adjacency => {
                if !board.has_any(player) {
                    return true;
                }
                neighbors(board, mv)
                    .into_iter()
                    .any(|n| board.cell(n.row, n.col) == Some(player.to_cell()))
            }
        }
    }

    /// True when `player` has no legal destination even though empty cells
    /// remain, which is only possible under the adjacency policy.
    pub fn is_stalled(&self, board: &Board, player: Player) -> bool {
        self.policy == MovePolicy::Adjacency
            && !board.is_full()
            && self.legal_moves(board, player).is_empty()
    }
}

/// In-bounds 8-neighborhood of a cell
fn neighbors(board: &Board, at: Move) -> SmallVec<[Move; 8]> {
    let mut out = SmallVec::new();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let row = at.row as isize + dr;
        let col = at.col as isize + dc;
        if row >= 0 && col >= 0 && board.in_bounds(row as usize, col as usize) {
            out.push(Move::new(row as usize, col as usize));
        }
    }
    out
}
