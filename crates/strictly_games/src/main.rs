//! Strictly Games - Othello on the console
//!
//! Interactive play against the computer or another human, and
//! computer-versus-computer simulation.

#![warn(missing_docs)]

mod cli;
mod config;
mod observer;
mod players;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use observer::ConsoleObserver;
use players::Rematch;
use strictly_othello::{Color, GameEvent, GameSession, MatchOutcome, MatchSummary, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { options } => run_play(config.with_overrides(&options)?),
        Command::Simulate { options, json } => {
            run_simulate(config.with_overrides(&options)?.without_humans(), json)
        }
    }
}

/// Builds the session and orchestrator described by `config`.
fn build_match(config: &GameConfig) -> Result<Orchestrator> {
    let session = GameSession::with_players(
        *config.board_size(),
        config.player(Color::Black),
        config.player(Color::White),
    )?;
    let orchestrator = Orchestrator::new(
        session,
        players::provider_for(config, Color::Black),
        players::provider_for(config, Color::White),
    )
    .with_max_turns(*config.max_turns());
    Ok(orchestrator)
}

/// Play an interactive game
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    let mut orchestrator = build_match(&config)?;
    info!(?config, "Starting interactive game");
    let mut observer = ConsoleObserver::new(std::io::stdout());

    loop {
        println!(
            "Othello - Black (B): {}, White (W): {}. Columns are x, rows are y.\n",
            orchestrator.seat_name(Color::Black),
            orchestrator.seat_name(Color::White)
        );
        println!("{}", orchestrator.session().board());

        let summary = orchestrator.run(&mut observer);
        info!(turns = summary.turns(), "Game ended");
        if matches!(summary.outcome(), MatchOutcome::Abandoned { .. }) {
            return Ok(());
        }

        match players::ask_rematch(&mut players::ConsoleInput, &mut std::io::stdout())? {
            Rematch::Stop => return Ok(()),
            Rematch::Again => orchestrator.rematch(false)?,
            Rematch::SwapColors => orchestrator.rematch(true)?,
        }
    }
}

/// Let the computer play both sides
#[instrument(skip(config))]
fn run_simulate(config: GameConfig, json: bool) -> Result<()> {
    let mut orchestrator = build_match(&config)?;
    info!(?config, "Starting simulation");

    let summary: MatchSummary = if json {
        let summary = orchestrator.run(&mut |_: &GameEvent| {});
        println!("{}", serde_json::to_string_pretty(&summary)?);
        summary
    } else {
        let mut observer = ConsoleObserver::new(std::io::stdout());
        orchestrator.run(&mut observer)
    };

    info!(
        outcome = ?summary.outcome(),
        black = summary.black_score(),
        white = summary.white_score(),
        "Simulation finished"
    );
    Ok(())
}
