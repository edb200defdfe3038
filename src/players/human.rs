//! Interactive player reading moves from a text stream

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::{
    Error, Result,
    board::{Board, Mark, Move},
    console,
    players::Strategy,
};

/// Prompts for coordinates and re-prompts until a legal move is entered
///
/// Generic over the input and output streams so tests can drive it with
/// in-memory buffers. Bad coordinates and illegal moves are reported and
/// retried; only a closed input stream ends the game with an error.
pub struct HumanStrategy<R, W> {
    input: R,
    output: W,
}

impl HumanStrategy<BufReader<Stdin>, Stdout> {
    /// Read moves from stdin, write prompts to stdout
    pub fn from_stdin() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Move> {
        loop {
            write!(self.output, "{mark}'s move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            let mv = match console::parse_coordinate(line.trim()) {
                Ok(mv) => mv,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            // Legality is delegated to the board; any rejection is reported
            // and the player is asked again.
            match board.apply(mv, mark) {
                Ok(_) => return Ok(mv),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn choose(board: &Board, mark: Mark, input: &str) -> (Result<Move>, String) {
        let mut output = Vec::new();
        let result = {
            let mut strategy = HumanStrategy::new(Cursor::new(input.to_string()), &mut output);
            strategy.choose_move(board, mark)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_valid_coordinate() {
        let (result, output) = choose(&Board::new(), Mark::X, "b2\n");
        assert_eq!(result.unwrap(), Move::new(1, 1));
        assert!(output.contains("X's move:"));
    }

    #[test]
    fn test_accepts_row_first_coordinate() {
        let (result, _) = choose(&Board::new(), Mark::X, "3a\n");
        assert_eq!(result.unwrap(), Move::new(2, 0));
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let (result, output) = choose(&Board::new(), Mark::X, "hello\nz9\nc1\n");
        assert_eq!(result.unwrap(), Move::new(0, 2));
        assert!(output.contains("invalid coordinates"));
        assert_eq!(output.matches("X's move:").count(), 3);
    }

    #[test]
    fn test_reprompts_on_occupied_cell() {
        let board: Board = "....X....".parse().unwrap();
        let (result, output) = choose(&board, Mark::O, "b2\na1\n");
        assert_eq!(result.unwrap(), Move::new(0, 0));
        assert!(output.contains("already occupied"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = choose(&Board::new(), Mark::X, "");
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
