//! Recorded games: move history, final outcome, and replay validation

use serde::{Deserialize, Serialize};

use crate::board::{Move, Player};
use crate::config::{EngineConfig, Variant};
use crate::engine::{Engine, GameStatus};
use crate::error::Result;
use crate::search::GameStateNode;

/// One entry of a game's move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub mv: Move,
    pub player: Player,
}

/// A complete game with history, suitable for JSON export and later replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rows: usize,
    pub cols: usize,
    pub run_length: usize,
    pub variant: Variant,
    pub moves: Vec<RecordedMove>,
    /// Final status; `None` while the game is unfinished or when it ended in
    /// an adjacency stall, which is not a board outcome.
    pub outcome: Option<GameStatus>,
}

impl GameRecord {
    /// Start an empty record for a game under `config`.
    pub fn new(config: &EngineConfig) -> Self {
        GameRecord {
            rows: config.rows,
            cols: config.cols,
            run_length: config.run_length,
            variant: config.variant,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn push(&mut self, mv: Move, player: Player) {
        self.moves.push(RecordedMove { mv, player });
    }

    pub fn finish(&mut self, outcome: GameStatus) {
        self.outcome = Some(outcome);
    }

    /// Serialize the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] when encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] on malformed input.
    pub fn from_json(json: &str) -> Result<GameRecord> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay the recorded moves through `engine` and return the final
    /// position.
    ///
    /// # Errors
    ///
    /// Returns the engine's rejection for the first recorded move that is
    /// illegal under the configuration; a failed replay indicates a
    /// corrupted or mismatched record.
    pub fn replay(&self, engine: &Engine) -> Result<GameStateNode> {
        let mut node = engine.new_game();
        for recorded in &self.moves {
            node = engine.submit_move(&node, recorded.mv, recorded.player)?;
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn played_out() -> (Engine, GameRecord, GameStateNode) {
        let engine = Engine::new(EngineConfig::classic()).unwrap();
        let mut record = GameRecord::new(engine.config());
        let mut node = engine.new_game();
        for (mv, player) in [
            (Move::new(1, 1), Player::Min),
            (Move::new(0, 0), Player::Max),
            (Move::new(0, 1), Player::Min),
            (Move::new(2, 2), Player::Max),
            (Move::new(2, 1), Player::Min),
        ] {
            node = engine.submit_move(&node, mv, player).unwrap();
            record.push(mv, player);
        }
        (engine, record, node)
    }

    #[test]
    fn replay_reproduces_the_position() {
        let (engine, record, node) = played_out();
        let replayed = record.replay(&engine).unwrap();
        assert_eq!(replayed.board(), node.board());
        assert_eq!(replayed.to_move(), node.to_move());
    }

    #[test]
    fn replay_rejects_corrupted_history() {
        // A move recorded after the decided position.
        let (engine, mut record, _) = played_out();
        record.push(Move::new(0, 2), Player::Max);
        assert!(matches!(record.replay(&engine).unwrap_err(), Error::GameOver));

        // A move colliding with an earlier one.
        let (engine, mut record, _) = played_out();
        record.moves[1].mv = Move::new(1, 1);
        assert!(matches!(
            record.replay(&engine).unwrap_err(),
            Error::CellOccupied { row: 1, col: 1 }
        ));
    }

    #[test]
    fn serde_round_trip_preserves_the_record() {
        let (engine, mut record, node) = played_out();
        record.finish(engine.terminal_status(&node));

        let json = record.to_json().unwrap();
        let back = GameRecord::from_json(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.outcome, Some(GameStatus::Win(Player::Min)));

        assert!(GameRecord::from_json("not a record").is_err());
    }
}
