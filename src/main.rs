//! Strictly Minimax - Unified CLI
//!
//! Plays tic-tac-toe in the terminal and exposes the search from the shell.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, SideArg};
use serde_json::json;
use std::time::Duration;
use strictly_minimax::{AppConfig, ComputerPlayer, GameEvent, Orchestrator, run_tui};
use strictly_tictactoe::{Board, Mark, Searcher, evaluate};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        side: None,
        first: None,
        delay_ms: None,
    }) {
        Command::Play {
            side,
            first,
            delay_ms,
        } => run_play(config, side, first, delay_ms).await,
        Command::BestMove { board, side, json } => {
            init_cli_tracing(&config);
            run_best_move(board, side.into(), json)
        }
        Command::Evaluate { board, json } => {
            init_cli_tracing(&config);
            run_evaluate(&board, json)
        }
        Command::SelfPlay { first } => {
            init_cli_tracing(&config);
            let first = first.map_or(*config.game().first_player(), Mark::from);
            run_self_play(first).await
        }
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Logs to stderr so stdout stays clean for results.
fn init_cli_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the terminal UI with command-line overrides applied.
async fn run_play(
    mut config: AppConfig,
    side: Option<SideArg>,
    first: Option<SideArg>,
    delay_ms: Option<u64>,
) -> Result<()> {
    if let Some(side) = side {
        config = config.with_human_side(side.into());
    }
    if let Some(first) = first {
        config = config.with_first_player(first.into());
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_thinking_delay_ms(delay_ms);
    }
    config.validate()?;
    run_tui(config).await
}

/// Prints the square minimax picks for `side`.
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(mut board: Board, side: Mark, as_json: bool) -> Result<()> {
    let mut searcher = Searcher::new();
    let scores = searcher.score_moves(&mut board, side);
    let best = searcher.search(&mut board, side);
    info!(nodes = searcher.stats().nodes, "Search complete");

    if as_json {
        let candidates: Vec<_> = scores
            .iter()
            .map(|(pos, score)| json!({ "index": pos.to_index(), "label": pos.label(), "score": score }))
            .collect();
        let best = best.map(|r| {
            json!({ "index": r.position.to_index(), "label": r.position.label(), "score": r.score })
        });
        let output = json!({ "side": side.to_string(), "best": best, "candidates": candidates });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match best {
        Some(result) => println!(
            "{} ({}, score {})",
            result.position.to_index(),
            result.position,
            result.score
        ),
        None => println!("none"),
    }
    Ok(())
}

/// Prints the outcome of `board`.
fn run_evaluate(board: &Board, as_json: bool) -> Result<()> {
    let outcome = evaluate(board);
    if as_json {
        let output = json!({
            "outcome": outcome.to_string(),
            "winner": outcome.winner().map(|mark| mark.to_string()),
            "over": outcome.is_over(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", outcome);
    }
    Ok(())
}

/// Plays the computer against itself and prints each move.
async fn run_self_play(first: Mark) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        first,
        Box::new(ComputerPlayer::new("Computer X", Duration::ZERO)),
        Box::new(ComputerPlayer::new("Computer O", Duration::ZERO)),
        event_tx,
    );

    let outcome = orchestrator.run().await?;

    while let Ok(event) = event_rx.try_recv() {
        if let GameEvent::MoveMade { player, mv, .. } = event {
            println!("{}: {}", player, mv);
        }
    }
    println!("{}", orchestrator.game().board().display());
    println!("{}", outcome);
    Ok(())
}
