//! Two-player k-in-a-row engine with two rule variants
//!
//! This crate provides:
//! - A pure board/state model with copy-on-apply move application
//! - Run detection (incremental and full-board reference scan)
//! - Legal-move generation, exhaustive or adjacency-restricted
//! - Minimax and alpha-beta search with the shared backup rule
//! - An engine facade for controllers: submit moves, compute replies,
//!   classify positions
//! - Game records with JSON export and replay validation
//!
//! Two variants are supported on any R×C board (R, C ≥ 3): the classic game
//! where completing a run of k wins, and the misère game where completing a
//! run loses and placement is restricted to the 8-neighborhood of the
//! mover's own marks.
//!
//! # Examples
//!
//! ```
//! use lineup::{Engine, EngineConfig, GameStatus, Move, Player};
//!
//! let engine = Engine::new(EngineConfig::classic())?;
//! let game = engine.new_game();
//!
//! // The human (minimizing side) opens in the center.
//! let game = engine.submit_move(&game, Move::new(1, 1), Player::Min)?;
//! assert_eq!(engine.terminal_status(&game), GameStatus::Continue);
//!
//! // The engine answers with its searched reply.
//! let (reply, _stats) = engine.compute_best_move(&game)?;
//! assert!(reply.last_move().is_some());
//! # Ok::<(), lineup::Error>(())
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod lines;
pub mod movegen;
pub mod search;

pub use board::{Board, Cell, Move, Player};
pub use config::{Algorithm, EngineConfig, Symbols, Variant};
pub use engine::{Engine, GameStatus};
pub use error::{Error, Result};
pub use eval::{Evaluator, WIN_SCORE};
pub use game::{GameRecord, RecordedMove};
pub use lines::{LineDetector, RunOutcome};
pub use movegen::{MoveGenerator, MovePolicy};
pub use search::{GameStateNode, SearchStats, Searcher};
