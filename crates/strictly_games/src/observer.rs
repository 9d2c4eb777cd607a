//! Console rendering of game events.

use std::io::Write;
use strictly_othello::{Color, GameEvent, GameObserver};
use tracing::warn;

/// Prints each event and the board after every move.
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match event {
            GameEvent::MovePlayed {
                player,
                report,
                board,
            } => {
                let flips = report.placement().flip_count();
                writeln!(
                    self.out,
                    "{} ({player}) played {} flipping {flips} disc{}",
                    report.mover(),
                    report.placement().placed(),
                    if flips == 1 { "" } else { "s" }
                )?;
                write!(self.out, "{board}")?;
                writeln!(
                    self.out,
                    "Black: {}  White: {}\n",
                    board.count(Color::Black),
                    board.count(Color::White)
                )?;
            }
            GameEvent::MoveRejected {
                position, error, ..
            } => {
                writeln!(self.out, "Invalid move {position}: {error}")?;
            }
            GameEvent::TurnSkipped { color } => {
                writeln!(self.out, "{color} has no legal move and passes.")?;
            }
            GameEvent::GameOver {
                winner,
                black_score,
                white_score,
            } => {
                let verdict = match winner {
                    Some(color) => format!("{color} wins"),
                    None => "Tie".to_string(),
                };
                writeln!(
                    self.out,
                    "Game over. {verdict} ({black_score} - {white_score})"
                )?;
            }
            GameEvent::Abandoned { color } => {
                writeln!(self.out, "{color} left the game.")?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn notify(&mut self, event: &GameEvent) {
        if let Err(error) = self.write_event(event) {
            warn!(%error, "Failed to print game event");
        }
    }
}
