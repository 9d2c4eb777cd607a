//! Command-line interface for strictly_games.

use crate::config::SeatKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_othello::Difficulty;

/// Strictly Games - Othello in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Othello against the computer or a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the console
    Play {
        /// Game settings overriding the config file
        #[command(flatten)]
        options: GameOptions,
    },

    /// Let the computer play both colors
    Simulate {
        /// Game settings overriding the config file
        #[command(flatten)]
        options: GameOptions,

        /// Print only a JSON summary of the result
        #[arg(long)]
        json: bool,
    },
}

/// Per-game settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GameOptions {
    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Who plays Black
    #[arg(long, value_enum)]
    pub black: Option<SeatKind>,

    /// Who plays White
    #[arg(long, value_enum)]
    pub white: Option<SeatKind>,

    /// Minimax difficulty: easy, medium or hard
    #[arg(long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Explicit minimax depth, overriding the difficulty
    #[arg(long)]
    pub depth: Option<u32>,

    /// Stop after this many moves
    #[arg(long)]
    pub max_turns: Option<usize>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    match s.to_ascii_lowercase().as_str() {
        "easy" | "1" => Ok(Difficulty::Easy),
        "medium" | "2" => Ok(Difficulty::Medium),
        "hard" | "3" => Ok(Difficulty::Hard),
        other => Err(format!("unknown difficulty '{other}' (easy, medium, hard)")),
    }
}
