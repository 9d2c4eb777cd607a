//! Game configuration loaded from TOML and overridden from the command line.

use crate::cli::GameOptions;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_othello::{Color, DEFAULT_MAX_TURNS, Difficulty, Player, Strategy};
use tracing::{debug, info, instrument};

/// Who sits at a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    /// Moves typed on the console.
    Human,
    /// Computer taking the biggest capture.
    Greedy,
    /// Computer searching with minimax.
    Minimax,
}

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Move cap per game.
    #[serde(default = "default_max_turns")]
    max_turns: usize,

    /// Who plays Black.
    #[serde(default = "default_black")]
    black: SeatKind,

    /// Who plays White.
    #[serde(default = "default_white")]
    white: SeatKind,

    /// Minimax difficulty preset.
    #[serde(default)]
    difficulty: Difficulty,

    /// Explicit minimax depth; wins over `difficulty` when set.
    #[serde(default)]
    depth: Option<u32>,
}

#[instrument]
fn default_board_size() -> usize {
    strictly_othello::Board::STANDARD_SIZE
}

#[instrument]
fn default_max_turns() -> usize {
    DEFAULT_MAX_TURNS
}

#[instrument]
fn default_black() -> SeatKind {
    SeatKind::Human
}

#[instrument]
fn default_white() -> SeatKind {
    SeatKind::Minimax
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            max_turns: default_max_turns(),
            black: default_black(),
            white: default_white(),
            difficulty: Difficulty::default(),
            depth: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, options: &GameOptions) -> Result<Self, ConfigError> {
        if let Some(size) = options.size {
            self.board_size = size;
        }
        if let Some(max_turns) = options.max_turns {
            self.max_turns = max_turns;
        }
        if let Some(black) = options.black {
            self.black = black;
        }
        if let Some(white) = options.white {
            self.white = white;
        }
        if let Some(difficulty) = options.difficulty {
            self.difficulty = difficulty;
        }
        if options.depth.is_some() {
            self.depth = options.depth;
        }
        self.validate()?;
        Ok(self)
    }

    /// Replaces human seats with the greedy computer player.
    pub fn without_humans(mut self) -> Self {
        for seat in [&mut self.black, &mut self.white] {
            if *seat == SeatKind::Human {
                *seat = SeatKind::Greedy;
            }
        }
        self
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::new(format!(
                "board_size must be at least 2, got {}",
                self.board_size
            )));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::new("max_turns must be positive".to_string()));
        }
        Ok(())
    }

    /// Minimax strategy from `depth` or `difficulty`.
    pub fn minimax(&self) -> Strategy {
        match self.depth {
            Some(depth) => Strategy::Minimax { depth },
            None => self.difficulty.strategy(),
        }
    }

    /// Seat configuration for `color`.
    pub fn seat(&self, color: Color) -> SeatKind {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Player identity for `color`.
    pub fn player(&self, color: Color) -> Player {
        match self.seat(color) {
            SeatKind::Human => Player::human(color),
            SeatKind::Greedy => Player::ai(color, Strategy::Greedy),
            SeatKind::Minimax => Player::ai(color, self.minimax()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use strictly_othello::PlayerKind;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.board_size(), 8);
        assert_eq!(*config.max_turns(), 200);
        assert_eq!(config.player(Color::Black), Player::human(Color::Black));
        assert_eq!(
            config.player(Color::White).kind,
            PlayerKind::Ai(Strategy::Minimax { depth: 2 })
        );
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 6").unwrap();
        writeln!(file, "black = \"greedy\"").unwrap();
        writeln!(file, "difficulty = \"hard\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.board_size(), 6);
        assert_eq!(*config.black(), SeatKind::Greedy);
        assert_eq!(*config.white(), SeatKind::Minimax);
        assert_eq!(config.minimax(), Strategy::Minimax { depth: 3 });
        assert_eq!(*config.max_turns(), 200);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 1").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("board_size"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "white = \"grandmaster\"").unwrap();
        assert!(GameConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.message.contains("Failed to read"));
        assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let options = GameOptions {
            size: Some(10),
            white: Some(SeatKind::Greedy),
            depth: Some(4),
            ..GameOptions::default()
        };
        let config = GameConfig::default().with_overrides(&options).unwrap();
        assert_eq!(*config.board_size(), 10);
        assert_eq!(config.seat(Color::White), SeatKind::Greedy);
        assert_eq!(config.minimax(), Strategy::Minimax { depth: 4 });

        let bad = GameOptions {
            max_turns: Some(0),
            ..GameOptions::default()
        };
        assert!(GameConfig::default().with_overrides(&bad).is_err());
    }

    #[test]
    fn test_without_humans() {
        let config = GameConfig::default().without_humans();
        assert_eq!(config.seat(Color::Black), SeatKind::Greedy);
        assert_eq!(config.seat(Color::White), SeatKind::Minimax);
    }
}
