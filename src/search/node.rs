//! Nodes of the game-state tree built during search

use crate::board::{Board, Move, Player};

/// One node of the minimax/alpha-beta tree: a board snapshot, the player to
/// move from it, and the remaining search depth.
///
/// Nodes own their boards outright (applying a move copies the parent grid),
/// so sibling subtrees never alias and can be dropped independently. There is
/// deliberately no parent back-reference; the search only ever walks
/// downward, and the caller retains nothing but the root between turns.
///
/// `estimation` and `chosen` start unset and are filled in exactly once by
/// the search that owns the node.
#[derive(Debug, Clone)]
pub struct GameStateNode {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) depth: usize,
    pub(crate) last_move: Option<Move>,
    pub(crate) estimation: Option<i32>,
    pub(crate) chosen: Option<Box<GameStateNode>>,
}

impl GameStateNode {
    /// A fresh root: no producing move, nothing evaluated yet.
    pub fn root(board: Board, to_move: Player, depth: usize) -> Self {
        GameStateNode {
            board,
            to_move,
            depth,
            last_move: None,
            estimation: None,
            chosen: None,
        }
    }

    /// Child node reached by `mv` leading to `board`: the opponent moves
    /// next and one ply of depth is spent.
    pub(crate) fn after_move(&self, mv: Move, board: Board) -> Self {
        GameStateNode {
            board,
            to_move: self.to_move.opponent(),
            depth: self.depth - 1,
            last_move: Some(mv),
            estimation: None,
            chosen: None,
        }
    }

    /// Tag a root with the move that produced it.
    pub(crate) fn with_last_move(mut self, mv: Move) -> Self {
        self.last_move = Some(mv);
        self
    }

    /// Reuse this node as the root of the next turn: depth is restored to
    /// `depth`, the old subtree is dropped, and the producing move and
    /// backed-up estimation are kept for the caller to inspect.
    pub(crate) fn into_next_root(mut self, depth: usize) -> Self {
        self.depth = depth;
        self.chosen = None;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move from this position
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Remaining search depth in plies
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The move that produced this board, if it is not a game root
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Backed-up score, present once a search has evaluated this node
    pub fn estimation(&self) -> Option<i32> {
        self.estimation
    }

    /// The successor picked by the most recent search, if any
    pub fn chosen(&self) -> Option<&GameStateNode> {
        self.chosen.as_deref()
    }

    /// Detach and return the chosen successor
    pub fn take_chosen(&mut self) -> Option<GameStateNode> {
        self.chosen.take().map(|child| *child)
    }
}
