//! Common test utilities for the lineup test suite.
#![allow(dead_code)]

use lineup::{Board, Engine, GameStateNode, Move, Symbols};
use rand::{rngs::StdRng, seq::IndexedRandom};

/// Board literal helper using the default X/O symbols.
pub fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows, &Symbols::default()).unwrap()
}

/// Play up to `plies` uniformly random legal moves through `engine`,
/// returning every visited position paired with the move that produced it.
///
/// Stops early when the game is decided, the board is full, or the mover is
/// stalled under the adjacency policy, so every returned position is
/// reachable under the engine's rules.
pub fn random_playout(
    engine: &Engine,
    rng: &mut StdRng,
    plies: usize,
) -> Vec<(GameStateNode, Move)> {
    let mut node = engine.new_game();
    let mut visited = Vec::new();
    for _ in 0..plies {
        if engine.terminal_status(&node).is_over() {
            break;
        }
        let moves = engine.legal_moves(&node);
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        node = engine
            .submit_move(&node, mv, node.to_move())
            .expect("randomly chosen legal move is accepted");
        visited.push((node.clone(), mv));
    }
    visited
}
