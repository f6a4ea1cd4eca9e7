//! Minimax and alpha-beta search over the game-state tree

mod node;

pub use node::GameStateNode;

use crate::board::Player;
use crate::config::{Algorithm, EngineConfig};
use crate::eval::Evaluator;
use crate::lines::RunOutcome;
use crate::movegen::MoveGenerator;

/// Search diagnostics for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Sibling groups abandoned early by an alpha-beta cutoff
    pub cutoffs: u64,
}

/// Depth-first adversarial search.
///
/// Both algorithms share one backup rule: a leaf (depth exhausted or
/// terminal board) takes the evaluator's score; an interior node takes the
/// estimation of the child its mover prefers: maximum for the maximizing
/// player, minimum for the minimizing player, first-encountered on ties.
/// Alpha-beta prunes siblings that provably cannot affect the root decision
/// and must back up the same root estimation as minimax, though it may pick
/// a different equally-valued move when ties exist.
///
/// A search is a pure function of the node and configuration: there is no
/// shared mutable state between sibling recursions, and recursion depth is
/// bounded by the configured ply limit, not by board size.
#[derive(Debug)]
pub struct Searcher {
    movegen: MoveGenerator,
    evaluator: Evaluator,
    algorithm: Algorithm,
    stats: SearchStats,
}

impl Searcher {
    pub fn from_config(config: &EngineConfig) -> Self {
        Searcher {
            movegen: MoveGenerator::new(config.policy),
            evaluator: Evaluator::new(config.variant, config.run_length),
            algorithm: config.algorithm,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run the configured algorithm on `root`, filling in `estimation` and
    /// `chosen` down the principal line. Returns the root estimation.
    ///
    /// The alpha-beta window starts at the full `i32` range, far outside any
    /// reachable score, so the root itself is never pruned.
    pub fn run(&mut self, root: &mut GameStateNode) -> i32 {
        self.stats = SearchStats::default();
        match self.algorithm {
            Algorithm::Minimax => self.minimax(root),
            Algorithm::AlphaBeta => self.alpha_beta(root, i32::MIN, i32::MAX),
        }
    }

    /// Full-width minimax: expand every legal move, score all children,
    /// then let the mover pick.
    pub fn minimax(&mut self, node: &mut GameStateNode) -> i32 {
        self.stats.nodes += 1;

        let outcome = self.classify(node);
        if node.depth == 0 || outcome != RunOutcome::Ongoing {
            let score = self
                .evaluator
                .score_outcome(outcome, &node.board, node.depth);
            node.estimation = Some(score);
            return score;
        }

        let moves = self.movegen.legal_moves(&node.board, node.to_move);
        if moves.is_empty() {
            // Adjacency stall: the mover cannot place anywhere. Scored as a
            // draw-like standstill; the engine surfaces it separately.
            node.estimation = Some(0);
            return 0;
        }

        let mut children: Vec<GameStateNode> = moves
            .into_iter()
            .map(|mv| {
                let board = node
                    .board
                    .apply(mv, node.to_move)
                    .expect("generated moves are legal");
                node.after_move(mv, board)
            })
            .collect();

        let mut best = 0;
        let mut best_score = self.minimax(&mut children[0]);
        for index in 1..children.len() {
            let score = self.minimax(&mut children[index]);
            let improves = match node.to_move {
                Player::Max => score > best_score,
                Player::Min => score < best_score,
            };
            if improves {
                best = index;
                best_score = score;
            }
        }

        node.chosen = Some(Box::new(children.swap_remove(best)));
        node.estimation = Some(best_score);
        best_score
    }

    /// Alpha-beta: identical leaf and backup semantics, but children are
    /// generated lazily in enumeration order and remaining siblings are
    /// dropped as soon as the window closes.
    pub fn alpha_beta(&mut self, node: &mut GameStateNode, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;

        let outcome = self.classify(node);
        if node.depth == 0 || outcome != RunOutcome::Ongoing {
            let score = self
                .evaluator
                .score_outcome(outcome, &node.board, node.depth);
            node.estimation = Some(score);
            return score;
        }

        let moves = self.movegen.legal_moves(&node.board, node.to_move);
        if moves.is_empty() {
            node.estimation = Some(0);
            return 0;
        }

        let maximizing = node.to_move == Player::Max;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut chosen: Option<Box<GameStateNode>> = None;

        for mv in moves {
            let board = node
                .board
                .apply(mv, node.to_move)
                .expect("generated moves are legal");
            let mut child = node.after_move(mv, board);
            let score = self.alpha_beta(&mut child, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    chosen = Some(Box::new(child));
                }
                if score > alpha {
                    alpha = score;
                }
            } else {
                if score < best_score {
                    best_score = score;
                    chosen = Some(Box::new(child));
                }
                if score < beta {
                    beta = score;
                }
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        node.chosen = chosen;
        node.estimation = Some(best_score);
        best_score
    }

    /// Terminal classification: the incremental detector when the producing
    /// move is known, the full-board scan for game roots.
    fn classify(&self, node: &GameStateNode) -> RunOutcome {
        match node.last_move {
            Some(mv) => self.evaluator.detector().outcome_after(&node.board, mv),
            None => self.evaluator.detector().outcome(&node.board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move};
    use crate::config::Symbols;
    use crate::eval::WIN_SCORE;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows, &Symbols::default()).unwrap()
    }

    fn classic(algorithm: Algorithm, depth: usize) -> Searcher {
        Searcher::from_config(
            &EngineConfig::classic()
                .with_algorithm(algorithm)
                .with_depth(depth),
        )
    }

    #[test]
    fn immediate_win_is_taken() {
        let b = board(&["XX#", "#O#", "###"]);
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let mut root = GameStateNode::root(b.clone(), Player::Max, 4);
            let score = classic(algorithm, 4).run(&mut root);
            assert_eq!(score, WIN_SCORE + 3);
            assert_eq!(root.chosen().unwrap().last_move(), Some(Move::new(0, 2)));
        }
    }

    #[test]
    fn minimax_breaks_ties_toward_first_enumerated_move() {
        // Both (0, 2) and (2, 0) complete a run for Max; enumeration order
        // is row-major, so minimax must settle on (0, 2).
        let b = board(&["XX#", "XO#", "#O#"]);
        let mut root = GameStateNode::root(b, Player::Max, 3);
        classic(Algorithm::Minimax, 3).run(&mut root);
        assert_eq!(root.chosen().unwrap().last_move(), Some(Move::new(0, 2)));
    }

    #[test]
    fn losing_threat_is_blocked() {
        // Min threatens to complete column 1 at (2, 1). At depth 2 Max has
        // no win of its own, so every move except the block loses on Min's
        // reply.
        let b = board(&["XO#", "#O#", "##X"]);
        let mut root = GameStateNode::root(b, Player::Max, 2);
        let score = classic(Algorithm::AlphaBeta, 2).run(&mut root);
        assert_eq!(
            root.chosen().unwrap().last_move(),
            Some(Move::new(2, 1)),
            "only blocking the column avoids the immediate loss"
        );
        assert!(score > -WIN_SCORE);
    }

    #[test]
    fn alpha_beta_matches_minimax_estimation() {
        let positions = [
            board(&["###", "###", "###"]),
            board(&["X##", "#O#", "###"]),
            board(&["XO#", "#X#", "##O"]),
            board(&["XOX", "#O#", "#X#"]),
        ];
        for b in positions {
            for depth in 1..=4 {
                let mut minimax_root = GameStateNode::root(b.clone(), Player::Max, depth);
                let minimax_score = classic(Algorithm::Minimax, depth).run(&mut minimax_root);

                let mut ab_root = GameStateNode::root(b.clone(), Player::Max, depth);
                let ab_score = classic(Algorithm::AlphaBeta, depth).run(&mut ab_root);

                assert_eq!(minimax_score, ab_score, "depth {depth}");
            }
        }
    }

    #[test]
    fn alpha_beta_visits_no_more_nodes_than_minimax() {
        let b = board(&["X##", "#O#", "###"]);
        let mut minimax_root = GameStateNode::root(b.clone(), Player::Max, 5);
        let mut minimax = classic(Algorithm::Minimax, 5);
        minimax.run(&mut minimax_root);

        let mut ab_root = GameStateNode::root(b, Player::Max, 5);
        let mut ab = classic(Algorithm::AlphaBeta, 5);
        ab.run(&mut ab_root);

        assert!(ab.stats().nodes <= minimax.stats().nodes);
        assert!(ab.stats().cutoffs > 0);
    }

    #[test]
    fn terminal_root_is_scored_without_expansion() {
        let b = board(&["XXX", "OO#", "###"]);
        let mut root = GameStateNode::root(b, Player::Min, 4);
        let mut searcher = classic(Algorithm::Minimax, 4);
        let score = searcher.run(&mut root);
        assert_eq!(score, WIN_SCORE + 4);
        assert!(root.chosen().is_none());
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn stalled_mover_scores_zero() {
        let config = EngineConfig::misere(4, 4).with_depth(3);
        // Max's lone mark is walled in; no run exists anywhere yet.
        let b = board(&["XO##", "OO##", "####", "####"]);
        let mut root = GameStateNode::root(b, Player::Max, 3);
        let score = Searcher::from_config(&config).run(&mut root);
        assert_eq!(score, 0);
        assert!(root.chosen().is_none());
    }

    #[test]
    fn misere_search_avoids_completing_a_run() {
        // Max has marks at (0,0) and (0,1) under adjacency rules. Playing
        // (0,2) or any cell extending the pair into a run of 3 loses
        // immediately; the search must pick a safe neighbor instead.
        let config = EngineConfig::misere(4, 4).with_depth(2);
        let b = board(&["XX##", "OO##", "####", "####"]);
        let mut root = GameStateNode::root(b, Player::Max, 2);
        let score = Searcher::from_config(&config).run(&mut root);
        let chosen = root.chosen().unwrap().last_move().unwrap();
        assert_ne!(chosen, Move::new(0, 2), "completing the run loses");
        assert!(score > -WIN_SCORE, "a non-losing move exists");
    }
}
