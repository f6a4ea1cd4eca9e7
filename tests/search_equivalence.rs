//! Alpha-beta must back up exactly the minimax root estimation for any
//! position and depth; pruning may only change which tied move is chosen.

mod common;

use lineup::{Algorithm, Engine, EngineConfig, GameStateNode, Searcher};
use rand::{rngs::StdRng, SeedableRng};

fn assert_equivalence(
    config: EngineConfig,
    seed: u64,
    prefix_plies: usize,
    depth: usize,
    samples: usize,
) {
    let engine = Engine::new(config.clone()).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..samples {
        // Terminal positions are kept: equivalence must hold there too.
        let playout = common::random_playout(&engine, &mut rng, prefix_plies);
        let (node, _) = playout.last().expect("at least one ply from an empty board");

        let minimax_config = config.clone().with_algorithm(Algorithm::Minimax);
        let mut minimax_root = GameStateNode::root(node.board().clone(), node.to_move(), depth);
        let minimax_score = Searcher::from_config(&minimax_config).run(&mut minimax_root);

        let ab_config = config.clone().with_algorithm(Algorithm::AlphaBeta);
        let mut ab_root = GameStateNode::root(node.board().clone(), node.to_move(), depth);
        let ab_score = Searcher::from_config(&ab_config).run(&mut ab_root);

        assert_eq!(
            minimax_score,
            ab_score,
            "root estimations diverge at depth {depth} on\n{:?}",
            node.board()
        );
        assert_eq!(minimax_root.estimation(), Some(minimax_score));
        assert_eq!(ab_root.estimation(), Some(ab_score));
    }
}

#[test]
fn classic_exhaustive_positions_are_value_equivalent() {
    assert_equivalence(EngineConfig::classic(), 3, 3, 4, 25);
}

#[test]
fn classic_positions_near_the_end_are_value_equivalent() {
    assert_equivalence(EngineConfig::classic(), 5, 6, 3, 25);
}

#[test]
fn misere_adjacency_positions_are_value_equivalent() {
    assert_equivalence(EngineConfig::misere(4, 4), 9, 4, 3, 25);
}

#[test]
fn wider_board_with_longer_runs_is_value_equivalent() {
    assert_equivalence(EngineConfig::new(4, 5).with_run_length(4), 13, 5, 3, 15);
}
