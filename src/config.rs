//! Engine configuration: one immutable value passed to every component.
//!
//! The original designs of this kind of engine tend to hang board dimensions,
//! player symbols and search depth off process-wide globals. Here the whole
//! setup is a single validated value owned by the [`Engine`](crate::Engine);
//! nothing outlives a game instance.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::error::{Error, Result};
use crate::movegen::MovePolicy;

/// Rule variant: what completing a run means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Variant {
    /// Completing a run of the configured length wins the game.
    Classic,
    /// Completing a run of the configured length loses the game.
    Misere,
}

/// Which search algorithm drives the engine's move choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Algorithm {
    /// Full-width minimax: every child is expanded and scored.
    Minimax,
    /// Minimax with alpha-beta pruning; same root value, fewer nodes.
    AlphaBeta,
}

/// Display/parse symbols for the two sides.
///
/// `'#'`, `'.'` and `'_'` are reserved for empty cells and may not be used
/// as a player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub maximizer: char,
    pub minimizer: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            maximizer: 'X',
            minimizer: 'O',
        }
    }
}

impl Symbols {
    pub fn new(maximizer: char, minimizer: char) -> Self {
        Symbols {
            maximizer,
            minimizer,
        }
    }

    /// Symbol played by `player`
    pub fn for_player(&self, player: Player) -> char {
        match player {
            Player::Max => self.maximizer,
            Player::Min => self.minimizer,
        }
    }

    fn is_reserved(c: char) -> bool {
        matches!(c, '#' | '.' | '_') || c.is_whitespace()
    }
}

/// Complete engine setup, fixed for the lifetime of a game.
///
/// # Examples
///
/// ```
/// use lineup::{Algorithm, EngineConfig, MovePolicy, Variant};
///
/// let config = EngineConfig::new(4, 4)
///     .with_variant(Variant::Misere)
///     .with_policy(MovePolicy::Adjacency)
///     .with_depth(4)
///     .with_algorithm(Algorithm::Minimax);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board rows (at least 3)
    pub rows: usize,
    /// Board columns (at least 3)
    pub cols: usize,
    /// Run length that ends the game (the "k" of k-in-a-row)
    pub run_length: usize,
    /// Win/lose interpretation of a completed run
    pub variant: Variant,
    /// Legal-destination policy for both sides
    pub policy: MovePolicy,
    /// Display symbols for the two sides
    pub symbols: Symbols,
    /// Search depth limit in plies (at least 1)
    pub depth: usize,
    /// Search algorithm
    pub algorithm: Algorithm,
    /// Who makes the first move of a fresh game
    pub first_player: Player,
}

impl EngineConfig {
    /// Classic rules on an `rows` × `cols` board: run of 3 wins, every empty
    /// cell is playable, the minimizing side (conventionally the human)
    /// opens.
    pub fn new(rows: usize, cols: usize) -> Self {
        EngineConfig {
            rows,
            cols,
            run_length: 3,
            variant: Variant::Classic,
            policy: MovePolicy::Exhaustive,
            symbols: Symbols::default(),
            depth: 6,
            algorithm: Algorithm::AlphaBeta,
            first_player: Player::Min,
        }
    }

    /// The classic 3×3 game
    pub fn classic() -> Self {
        Self::new(3, 3)
    }

    /// The misère game: completing a run of 3 loses, and moves are
    /// restricted to the 8-neighborhood of the mover's own marks.
    pub fn misere(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
            .with_variant(Variant::Misere)
            .with_policy(MovePolicy::Adjacency)
    }

    pub fn with_run_length(mut self, run_length: usize) -> Self {
        self.run_length = run_length;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_policy(mut self, policy: MovePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Check the configuration as a whole.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the board is smaller than 3 in
    /// either extent, the run length does not fit the board, the depth is
    /// zero, or the player symbols collide with each other or with the
    /// reserved empty-cell markers.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 3 || self.cols < 3 {
            return Err(Error::invalid_config(format!(
                "board must be at least 3x3, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.run_length < 2 {
            return Err(Error::invalid_config(format!(
                "run length must be at least 2, got {}",
                self.run_length
            )));
        }
        if self.run_length > self.rows || self.run_length > self.cols {
            return Err(Error::invalid_config(format!(
                "run length {} does not fit a {}x{} board",
                self.run_length, self.rows, self.cols
            )));
        }
        if self.depth < 1 {
            return Err(Error::invalid_config("search depth must be at least 1"));
        }
        if self.symbols.maximizer == self.symbols.minimizer {
            return Err(Error::invalid_config(format!(
                "player symbols must differ, both are '{}'",
                self.symbols.maximizer
            )));
        }
        for symbol in [self.symbols.maximizer, self.symbols.minimizer] {
            if Symbols::is_reserved(symbol) {
                return Err(Error::invalid_config(format!(
                    "'{symbol}' is reserved for empty cells"
                )));
            }
        }
        Ok(())
    }
}
