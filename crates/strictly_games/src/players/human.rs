//! Human player reading moves from a line-oriented input.

use std::io::{self, BufRead, Write};
use strictly_othello::{Board, Color, MoveProvider, Position, Rules};
use tracing::{debug, instrument, warn};

/// Source of input lines.
pub trait LineInput {
    /// Next line without its terminator, `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineInput for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

/// Reads from the process's standard input without holding its lock, so
/// two human seats can share the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleInput;

impl LineInput for ConsoleInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

/// Human seat prompting for coordinates.
///
/// Accepts `x y` or `x,y`. `hint` lists the legal moves, `quit` (or end of
/// input) gives up the game. Unreadable input is reported and asked again;
/// legality is left to the game session.
pub struct HumanPlayer<I, W> {
    name: String,
    input: I,
    output: W,
}

impl<I: LineInput, W: Write> HumanPlayer<I, W> {
    /// Creates a human player.
    pub fn new(name: impl Into<String>, input: I, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self, board: &Board, color: Color) -> io::Result<Option<Position>> {
        loop {
            write!(
                self.output,
                "{} ({}) - enter a move as 'x y', 'hint' or 'quit': ",
                color,
                color.glyph()
            )?;
            self.output.flush()?;

            let Some(line) = self.input.next_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "" => continue,
                "q" | "quit" | "exit" => return Ok(None),
                "h" | "hint" | "?" => {
                    let moves = Rules::new(color).possible_moves(board);
                    writeln!(self.output, "{}", board.render(&moves))?;
                    let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
                    writeln!(self.output, "Legal moves: {}", listed.join(" "))?;
                }
                text => match Position::parse(text) {
                    Some(position) => return Ok(Some(position)),
                    None => {
                        debug!(input = text, "Unreadable move");
                        writeln!(self.output, "Could not read '{text}', try e.g. '2 3'.")?;
                    }
                },
            }
        }
    }
}

impl<I: LineInput, W: Write> MoveProvider for HumanPlayer<I, W> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, board), fields(player = %self.name))]
    fn next_move(&mut self, board: &Board, color: Color) -> Option<Position> {
        match self.prompt(board, color) {
            Ok(choice) => choice,
            Err(error) => {
                warn!(%error, "Console unavailable");
                None
            }
        }
    }
}

/// Answer to the end-of-game question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rematch {
    /// Leave the program.
    Stop,
    /// Same seats, fresh board.
    Again,
    /// Fresh board with colors exchanged.
    SwapColors,
}

/// Asks whether to play another game. End of input counts as [`Rematch::Stop`].
pub fn ask_rematch(input: &mut impl LineInput, output: &mut impl Write) -> io::Result<Rematch> {
    loop {
        write!(output, "Play again? [y]es, [s]wap colors, [n]o: ")?;
        output.flush()?;
        let Some(line) = input.next_line()? else {
            writeln!(output)?;
            return Ok(Rematch::Stop);
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(Rematch::Again),
            "s" | "swap" => return Ok(Rematch::SwapColors),
            "n" | "no" | "q" | "quit" => return Ok(Rematch::Stop),
            _ => continue,
        }
    }
}
