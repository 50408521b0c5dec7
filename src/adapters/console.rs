//! Text console adapters: the human seat and the board printout
//!
//! Both are generic over their reader/writer so tests can drive them with
//! in-memory buffers.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::{
    Result,
    pipeline::Tally,
    ports::{Agent, Observer},
    tictactoe::{Board, Cell, Coord, GameOutcome, Player, Round, coord::SIZE},
};

/// Render the board as rows like `X | O | X`, separated by dashed lines,
/// followed by a blank line.
pub fn render_board(board: &Board) -> String {
    let separator = "-".repeat(4 * SIZE - 1);
    let mut out = String::new();
    for row in 0..SIZE {
        let cells: Vec<String> = (0..SIZE)
            .map(|col| {
                let cell = board.cells()[row * SIZE + col];
                match cell {
                    Cell::Empty => " ".to_string(),
                    marked => marked.to_char().to_string(),
                }
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
        if row < SIZE - 1 {
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

/// Human player reading row and column numbers from a line-based input
pub struct ConsoleAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    /// Ask whether to play another round. Only `yes` (any case) continues;
    /// closed input counts as no.
    pub fn confirm_replay(&mut self) -> Result<bool> {
        self.write_prompt("Do you want to play again? (yes/no): ")?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")))
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| crate::Error::io("read console input", e))?;
        Ok((read > 0).then_some(line))
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{prompt}").map_err(|e| crate::Error::io("write prompt", e))?;
        self.output
            .flush()
            .map_err(|e| crate::Error::io("flush prompt", e))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| crate::Error::io("write message", e))
    }

    /// Prompt until a number in `0..3` is entered
    fn read_axis(&mut self, axis: &str) -> Result<usize> {
        loop {
            self.write_prompt(&format!("Enter the {axis} (0, 1, or 2): "))?;
            let line = self.read_line()?.ok_or(crate::Error::InputClosed)?;
            match line.trim().parse::<usize>() {
                Ok(value) if value < SIZE => return Ok(value),
                _ => {
                    warn!(input = line.trim(), axis, "rejected console input");
                    self.say("Please enter 0, 1, or 2.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for ConsoleAgent<R, W> {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        loop {
            let row = self.read_axis("row")?;
            let col = self.read_axis("column")?;
            let coord = Coord::new(row, col)?;
            if board.is_empty(coord) {
                return Ok(coord);
            }
            warn!(%coord, "human chose an occupied cell");
            self.say("Cell already taken. Try again.")?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Prints the board before every move and the result after every round
pub struct ConsoleObserver<W> {
    output: W,
    computer: Player,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(output: W, computer: Player) -> Self {
        Self { output, computer }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").map_err(|e| crate::Error::io("write to console", e))
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_turn(&mut self, round: &Round) -> Result<()> {
        let mut text = render_board(round.board());
        if round.to_move() == self.computer {
            text.push_str(&format!("AI's turn ({})\n", self.computer));
        }
        self.emit(&text)
    }

    fn on_round_end(&mut self, _round_num: usize, round: &Round, tally: &Tally) -> Result<()> {
        let mut text = render_board(round.board());
        match round.outcome() {
            Some(GameOutcome::Win(winner)) => text.push_str(&format!("{winner} wins!\n")),
            Some(GameOutcome::Draw) | None => text.push_str("It's a tie!\n"),
        }
        text.push_str(&format!("{tally}\n"));
        self.emit(&text)
    }
}
