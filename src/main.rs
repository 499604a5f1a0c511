//! Connect-five headless driver
//!
//! Plays, replays and hints against the engine without any rendering.

mod cli;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use cli::{parse_steps, Cli, Command, Step};
use gomoku::eval::best_hint;
use gomoku::{MatchConfig, MoveOutcome, TurnClock, TurnEngine};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };

    match cli.command {
        Command::Selfplay { rounds } => selfplay(config, rounds),
        Command::Replay { moves } => replay(config, &moves),
        Command::Hint { moves } => hint(config, &moves),
    }
}

/// Hint-driven play for both marks, one turn clock shared by the round.
fn selfplay(config: MatchConfig, rounds: u32) -> Result<()> {
    let mut engine = TurnEngine::with_config(config);
    let mut clock = TurnClock::new(config.turn_limit(), Instant::now());
    info!(rounds, win_threshold = engine.config().win_threshold, "Starting self-play");

    for round in 1..=rounds {
        let outcome = loop {
            let now = Instant::now();
            if clock.is_expired(now) {
                warn!(mark = %engine.current_mark(), limit = ?clock.limit(), "turn clock expired");
                engine.expire_turn();
                clock.restart(now);
                continue;
            }
            let Some(pos) = engine.suggest_move() else {
                break None;
            };
            let outcome = engine.play(pos);
            clock.restart(Instant::now());
            if outcome.ends_round() {
                break Some(outcome);
            }
        };

        println!("Round {round}:\n{}", engine.board());
        if let Some(outcome) = &outcome {
            println!("{}", describe(outcome));
        }
        if engine.match_winner().is_some() {
            break;
        }
        engine.reset_round();
        clock.restart(Instant::now());
    }

    print_tallies(&engine);
    Ok(())
}

fn replay(config: MatchConfig, script: &str) -> Result<()> {
    let mut engine = TurnEngine::with_config(config);
    for step in parse_steps(script)? {
        let line = run_step(&mut engine, step)?;
        println!("{line}");
    }
    println!("{}", engine.board());
    print_tallies(&engine);
    Ok(())
}

fn hint(config: MatchConfig, script: &str) -> Result<()> {
    let mut engine = TurnEngine::with_config(config);
    for step in parse_steps(script)? {
        run_step(&mut engine, step)?;
    }
    println!("{}", engine.board());

    match engine.suggest_move() {
        Some(pos) => {
            let score = best_hint(engine.board(), engine.current_mark()).map_or(0, |h| h.score);
            println!("{} should play {pos} (score {score})", engine.current_mark());
        }
        None => println!("no move to suggest"),
    }
    Ok(())
}

fn run_step(engine: &mut TurnEngine, step: Step) -> Result<String> {
    Ok(match step {
        Step::Place { row, col } => {
            let outcome = engine.apply_move(row, col)?;
            format!("({row}, {col}): {}", describe(&outcome))
        }
        Step::Timeout => format!("timeout: {}", describe(&engine.expire_turn())),
        Step::Undo => {
            if engine.undo_move() {
                format!("undo: {} to play", engine.current_mark())
            } else {
                "undo: nothing to undo".to_string()
            }
        }
        Step::Reset => {
            engine.reset_round();
            "reset".to_string()
        }
    })
}

fn describe(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Continued { next } => format!("{next} to play"),
        MoveOutcome::RoundWon {
            mark,
            line,
            x_wins,
            o_wins,
        } => format!(
            "{mark} wins this round with {} in a row (X {x_wins} | O {o_wins})",
            line.len()
        ),
        MoveOutcome::MatchWon {
            mark,
            x_wins,
            o_wins,
            ..
        } => format!("{mark} wins the match! (X {x_wins} | O {o_wins})"),
        MoveOutcome::Draw { draws } => format!("draw ({draws} so far)"),
        MoveOutcome::Rejected(reason) => format!("rejected: {reason:?}"),
    }
}

fn print_tallies(engine: &TurnEngine) {
    let t = engine.tallies();
    println!("X wins: {} | O wins: {} | draws: {}", t.x_wins, t.o_wins, t.draws);
}
