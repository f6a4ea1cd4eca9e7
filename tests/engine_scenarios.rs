//! Scripted end-to-end scenarios for the engine facade

mod common;

use lineup::{
    Algorithm, Engine, EngineConfig, GameStateNode, GameStatus, Move, MoveGenerator, MovePolicy,
    Player, WIN_SCORE,
};

/// Full-depth self-play on the classic 3×3 game is a draw, for both
/// algorithms, from either opening side.
#[test]
fn full_depth_classic_self_play_is_a_draw() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let engine = Engine::new(
            EngineConfig::classic()
                .with_depth(9)
                .with_algorithm(algorithm)
                .with_first_player(Player::Max),
        )
        .unwrap();

        let mut node = engine.new_game();
        let mut plies = 0;
        while !engine.terminal_status(&node).is_over() {
            let (next, _) = engine.compute_best_move(&node).unwrap();
            node = next;
            plies += 1;
            assert!(plies <= 9, "a 3x3 game cannot outlast the board");
        }

        assert_eq!(engine.terminal_status(&node), GameStatus::Draw);
        assert_eq!(plies, 9, "perfect play fills the board");
    }
}

/// Minimax and alpha-beta agree on the value of the opening position at
/// full depth: a draw, estimation 0.
#[test]
fn opening_position_is_worth_zero_at_full_depth() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let engine = Engine::new(
            EngineConfig::classic()
                .with_depth(9)
                .with_algorithm(algorithm)
                .with_first_player(Player::Min),
        )
        .unwrap();
        let (reply, _) = engine.compute_best_move(&engine.new_game()).unwrap();
        assert_eq!(reply.estimation(), Some(0), "{algorithm:?}");
    }
}

/// With the top row one cell short, the maximizer must complete it for an
/// immediate win worth `99 + depth_remaining`.
#[test]
fn maximizer_completes_the_top_row() {
    let depth = 6;
    let engine = Engine::new(
        EngineConfig::classic()
            .with_depth(depth)
            .with_first_player(Player::Max),
    )
    .unwrap();
    let game = GameStateNode::root(
        common::board(&["XX#", "#O#", "###"]),
        Player::Max,
        depth,
    );

    let (reply, _) = engine.compute_best_move(&game).unwrap();
    assert_eq!(reply.last_move(), Some(Move::new(0, 2)));
    assert_eq!(reply.estimation(), Some(WIN_SCORE + depth as i32 - 1));
    assert_eq!(engine.terminal_status(&reply), GameStatus::Win(Player::Max));
}

/// Misère adjacency move sets on a 4×4 board: a markless player may play
/// anywhere; after one mark at (1, 1) exactly its 8 neighbors are legal.
#[test]
fn misere_adjacency_move_sets() {
    let engine = Engine::new(EngineConfig::misere(4, 4)).unwrap();
    let game = engine.new_game();
    assert_eq!(engine.legal_moves(&game).len(), 16);

    let game = engine
        .submit_move(&game, Move::new(1, 1), Player::Min)
        .unwrap();

    // The opponent still has no marks: all 15 remaining cells.
    assert_eq!(engine.legal_moves(&game).len(), 15);

    // For the player who marked (1, 1), exactly the 8 neighbors.
    let generator = MoveGenerator::new(MovePolicy::Adjacency);
    let own_moves = generator.legal_moves(game.board(), Player::Min);
    assert_eq!(
        own_moves,
        vec![
            Move::new(0, 0),
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 0),
            Move::new(2, 1),
            Move::new(2, 2),
        ]
    );
}

/// Submitting a move onto an occupied cell is rejected and leaves the
/// position untouched.
#[test]
fn occupied_cell_submission_is_rejected_without_mutation() {
    let engine = Engine::new(EngineConfig::classic()).unwrap();
    let game = engine.new_game();
    let game = engine
        .submit_move(&game, Move::new(0, 0), Player::Min)
        .unwrap();
    let snapshot = game.board().clone();

    let err = engine
        .submit_move(&game, Move::new(0, 0), Player::Max)
        .unwrap_err();
    assert!(err.is_illegal_move());
    assert_eq!(game.board(), &snapshot);
    assert_eq!(game.to_move(), Player::Max);
}

/// A full misère game between the engine and itself ends in a decided
/// outcome or a stall, never a crash, and every move respects adjacency.
#[test]
fn misere_self_play_runs_to_completion() {
    let engine = Engine::new(EngineConfig::misere(4, 4).with_depth(4)).unwrap();
    let generator = MoveGenerator::new(MovePolicy::Adjacency);

    let mut node = engine.new_game();
    loop {
        if engine.terminal_status(&node).is_over() || engine.is_stalled(&node) {
            break;
        }
        let mover = node.to_move();
        let before = node.board().clone();
        let (next, _) = engine.compute_best_move(&node).unwrap();
        let mv = next.last_move().unwrap();
        assert!(generator.permits(&before, mover, mv), "{mv} breaks adjacency");
        node = next;
    }

    match engine.terminal_status(&node) {
        GameStatus::Loss(_) | GameStatus::Draw => {}
        GameStatus::Continue => assert!(engine.is_stalled(&node)),
        GameStatus::Win(player) => panic!("no winning-by-run in misère, got Win({player:?})"),
    }
}
