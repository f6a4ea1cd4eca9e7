//! The engine facade consumed by controller and UI layers

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::config::{EngineConfig, Variant};
use crate::error::{Error, Result};
use crate::lines::{LineDetector, RunOutcome};
use crate::movegen::MoveGenerator;
use crate::search::{GameStateNode, SearchStats, Searcher};

/// Game status from the caller's point of view, with the completed-run
/// semantics of the configured variant already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game goes on
    Continue,
    /// The named player completed a run and wins (classic variant)
    Win(Player),
    /// The named player completed a run and loses (misère variant)
    Loss(Player),
    /// Board full, no qualifying run
    Draw,
}

impl GameStatus {
    /// The player who comes out ahead, if the game is decided
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(player),
            GameStatus::Loss(player) => Some(player.opponent()),
            GameStatus::Continue | GameStatus::Draw => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::Continue
    }
}

/// The game engine: a validated configuration plus the pure state-and-search
/// API the surrounding controller drives.
///
/// The engine itself is stateless between calls: callers hold the current
/// [`GameStateNode`] and pass it in. [`compute_best_move`] is synchronous
/// and CPU-bound; on interactive surfaces it should not run on a thread
/// that must stay responsive.
///
/// [`compute_best_move`]: Engine::compute_best_move
///
/// # Examples
///
/// ```
/// use lineup::{Engine, EngineConfig, Move, Player};
///
/// let engine = Engine::new(EngineConfig::classic())?;
/// let game = engine.new_game();
/// let game = engine.submit_move(&game, Move::new(0, 0), Player::Min)?;
/// let (reply, stats) = engine.compute_best_move(&game)?;
///
/// assert!(reply.last_move().is_some());
/// assert!(stats.nodes > 0);
/// # Ok::<(), lineup::Error>(())
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    movegen: MoveGenerator,
    detector: LineDetector,
}

impl Engine {
    /// Validate `config` and build an engine around it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the configuration is rejected;
    /// see [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Engine> {
        config.validate()?;
        let movegen = MoveGenerator::new(config.policy);
        let detector = LineDetector::new(config.run_length);
        Ok(Engine {
            config,
            movegen,
            detector,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A fresh game: empty board, configured first player and search depth.
    pub fn new_game(&self) -> GameStateNode {
        GameStateNode::root(
            Board::new(self.config.rows, self.config.cols),
            self.config.first_player,
            self.config.depth,
        )
    }

    /// Legal destinations for the player to move, in row-major order.
    pub fn legal_moves(&self, node: &GameStateNode) -> Vec<Move> {
        self.movegen.legal_moves(node.board(), node.to_move())
    }

    /// Apply a move submitted from outside the search (typically the human
    /// side) and return the successor position. The input node is never
    /// modified.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] on a finished game, [`Error::OutOfTurn`] when it
    /// is not `player`'s move, [`Error::MoveOutOfBounds`] /
    /// [`Error::CellOccupied`] on an unplayable target, and
    /// [`Error::NotAdjacent`] when the adjacency policy forbids the cell.
    /// All of these satisfy [`Error::is_illegal_move`] except `GameOver`,
    /// so callers can re-prompt on the recoverable ones.
    pub fn submit_move(
        &self,
        node: &GameStateNode,
        mv: Move,
        player: Player,
    ) -> Result<GameStateNode> {
        if self.terminal_status(node).is_over() {
            return Err(Error::GameOver);
        }
        if player != node.to_move() {
            return Err(Error::OutOfTurn { player });
        }
        let applied = node.board().apply(mv, player)?;
        if !self.movegen.permits(node.board(), player, mv) {
            return Err(Error::NotAdjacent {
                row: mv.row,
                col: mv.col,
                player,
            });
        }
        Ok(GameStateNode::root(applied, player.opponent(), self.config.depth).with_last_move(mv))
    }

    /// Run the configured search and return the engine's reply: a fresh
    /// full-depth root whose [`last_move`](GameStateNode::last_move) is the
    /// move played and whose [`estimation`](GameStateNode::estimation) is
    /// the backed-up score, along with the search diagnostics.
    ///
    /// Everything below the root is discarded before returning; only the
    /// chosen position survives the call.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] on a finished game, [`Error::NoLegalMove`] when
    /// the adjacency policy leaves the mover stalled.
    pub fn compute_best_move(&self, node: &GameStateNode) -> Result<(GameStateNode, SearchStats)> {
        if self.terminal_status(node).is_over() {
            return Err(Error::GameOver);
        }
        let mut root =
            GameStateNode::root(node.board().clone(), node.to_move(), self.config.depth);
        let mut searcher = Searcher::from_config(&self.config);
        searcher.run(&mut root);
        match root.take_chosen() {
            // The chosen child's estimation equals the root's by the backup
            // rule, so the reply carries the search score as-is.
            Some(child) => Ok((child.into_next_root(self.config.depth), searcher.stats())),
            None => Err(Error::NoLegalMove {
                player: node.to_move(),
            }),
        }
    }

    /// Classify the position with the full-board scan, interpreted per the
    /// configured variant. Pure: calling it twice yields the same answer.
    pub fn terminal_status(&self, node: &GameStateNode) -> GameStatus {
        match self.detector.outcome(node.board()) {
            RunOutcome::Ongoing => GameStatus::Continue,
            RunOutcome::Draw => GameStatus::Draw,
            RunOutcome::Run(former) => match self.config.variant {
                Variant::Classic => GameStatus::Win(former),
                Variant::Misere => GameStatus::Loss(former),
            },
        }
    }

    /// True when the game is undecided but the player to move has no legal
    /// destination under the adjacency policy. Distinct from a draw: the
    /// board is not full, the mover is merely walled in.
    pub fn is_stalled(&self, node: &GameStateNode) -> bool {
        !self.terminal_status(node).is_over()
            && self.movegen.is_stalled(node.board(), node.to_move())
    }
}
