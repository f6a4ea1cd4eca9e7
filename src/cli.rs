//! Interactive command-line play against the engine

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::board::{Move, Player};
use crate::config::{Algorithm, EngineConfig, Symbols, Variant};
use crate::engine::{Engine, GameStatus};
use crate::error::Error;
use crate::game::GameRecord;
use crate::movegen::MovePolicy;
use crate::search::GameStateNode;

#[derive(Parser, Debug)]
#[command(
    name = "lineup",
    version,
    about = "Play a k-in-a-row game against the search engine"
)]
pub struct PlayArgs {
    /// Board rows
    #[arg(long, default_value_t = 3)]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 3)]
    pub cols: usize,

    /// Run length that ends the game
    #[arg(long, short = 'k', default_value_t = 3)]
    pub run_length: usize,

    /// Rule variant: classic runs win, misère runs lose
    #[arg(long, value_enum, default_value = "classic")]
    pub variant: Variant,

    /// Move policy; defaults to exhaustive for classic, adjacency for misère
    #[arg(long, value_enum)]
    pub policy: Option<MovePolicy>,

    /// Search depth in plies
    #[arg(long, short = 'd', default_value_t = 6)]
    pub depth: usize,

    /// Search algorithm
    #[arg(long, value_enum, default_value = "alpha-beta")]
    pub algorithm: Algorithm,

    /// Symbol you play with; the engine takes the other of X/O
    #[arg(long, default_value_t = 'X')]
    pub symbol: char,

    /// Let the engine open the game
    #[arg(long)]
    pub engine_first: bool,

    /// Replace the search with a uniform-random baseline
    #[arg(long)]
    pub random: bool,

    /// Seed for the random baseline, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the finished game record to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl PlayArgs {
    fn engine_config(&self) -> EngineConfig {
        let policy = self.policy.unwrap_or(match self.variant {
            Variant::Classic => MovePolicy::Exhaustive,
            Variant::Misere => MovePolicy::Adjacency,
        });
        let engine_symbol = if self.symbol == 'O' { 'X' } else { 'O' };
        EngineConfig::new(self.rows, self.cols)
            .with_run_length(self.run_length)
            .with_variant(self.variant)
            .with_policy(policy)
            .with_symbols(Symbols::new(engine_symbol, self.symbol))
            .with_depth(self.depth)
            .with_algorithm(self.algorithm)
            .with_first_player(if self.engine_first {
                Player::Max
            } else {
                Player::Min
            })
    }
}

/// Run an interactive game. The human plays the minimizing side.
pub fn execute(args: PlayArgs) -> Result<()> {
    let engine = Engine::new(args.engine_config()).context("rejected configuration")?;
    let symbols = engine.config().symbols;
    let mut record = GameRecord::new(engine.config());
    let mut rng = args
        .random
        .then(|| StdRng::seed_from_u64(args.seed.unwrap_or_else(rand::random)));

    let mut node = engine.new_game();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!(
        "{} on a {}x{} board, runs of {} {}, you play {}",
        match engine.config().variant {
            Variant::Classic => "Classic game",
            Variant::Misere => "Misère game",
        },
        engine.config().rows,
        engine.config().cols,
        engine.config().run_length,
        match engine.config().variant {
            Variant::Classic => "win",
            Variant::Misere => "lose",
        },
        symbols.minimizer,
    );

    let status = loop {
        let status = engine.terminal_status(&node);
        if status.is_over() {
            break status;
        }
        if engine.is_stalled(&node) {
            println!(
                "No legal move left for {}: the game stalls.",
                symbols.for_player(node.to_move())
            );
            break GameStatus::Continue;
        }

        if node.to_move() == Player::Min {
            println!("\n{}", node.board().render(&symbols));
            let mv = read_move(&mut input, symbols.minimizer)?;
            match engine.submit_move(&node, mv, Player::Min) {
                Ok(next) => {
                    record.push(mv, Player::Min);
                    node = next;
                }
                Err(err) if err.is_illegal_move() => println!("{err}"),
                Err(err) => return Err(err.into()),
            }
        } else {
            node = engine_turn(&engine, &node, &mut record, rng.as_mut(), &symbols)?;
        }
    };

    println!("\n{}", node.board().render(&symbols));
    match status {
        GameStatus::Win(player) => println!("{} wins!", symbols.for_player(player)),
        GameStatus::Loss(player) => println!(
            "{} completed a run and loses, {} wins!",
            symbols.for_player(player),
            symbols.for_player(player.opponent())
        ),
        GameStatus::Draw => println!("Draw."),
        GameStatus::Continue => {}
    }
    if status.is_over() {
        record.finish(status);
    }

    if let Some(path) = &args.export {
        let json = record.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("cannot write export file {}", path.display()))?;
        println!("Game record written to {}", path.display());
    }

    Ok(())
}

fn engine_turn(
    engine: &Engine,
    node: &GameStateNode,
    record: &mut GameRecord,
    rng: Option<&mut StdRng>,
    symbols: &Symbols,
) -> Result<GameStateNode> {
    let start = Instant::now();
    let next = match rng {
        Some(rng) => {
            let moves = engine.legal_moves(node);
            let mv = *moves
                .choose(rng)
                .ok_or(Error::NoLegalMove { player: Player::Max })?;
            let next = engine.submit_move(node, mv, Player::Max)?;
            println!("{} plays {}", symbols.maximizer, mv);
            next
        }
        None => {
            let (next, stats) = engine.compute_best_move(node)?;
            let mv = next.last_move().expect("engine reply carries its move");
            println!(
                "{} plays {} in {:.1?}, {} nodes, score {}",
                symbols.maximizer,
                mv,
                start.elapsed(),
                stats.nodes,
                next.estimation().unwrap_or_default(),
            );
            next
        }
    };
    let mv = next.last_move().expect("engine reply carries its move");
    record.push(mv, Player::Max);
    Ok(next)
}

/// Prompt until a `row col` pair parses. Bounds and occupancy are checked by
/// the engine, so this only has to produce two integers.
fn read_move(input: &mut impl BufRead, symbol: char) -> Result<Move> {
    let mut line = String::new();
    loop {
        print!("{symbol} move (row col): ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }
        let mut parts = line.split_whitespace();
        match (
            parts.next().map(str::parse::<usize>),
            parts.next().map(str::parse::<usize>),
        ) {
            (Some(Ok(row)), Some(Ok(col))) => return Ok(Move::new(row, col)),
            _ => println!("Enter two numbers, e.g. `0 2`."),
        }
    }
}
