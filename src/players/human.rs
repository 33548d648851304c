//! Human move source: textual prompting

use std::io::{self, BufRead, BufReader, Write};

use crate::{
    Error, Result,
    game::{Move, PileState},
    ports::MoveSource,
};

/// Interactive move source reading pile index and count from a prompt.
///
/// Pile indices are entered one-based, matching the printed pile listing.
/// Unparseable input is re-asked here; whether the move is legal for the
/// current position is the match loop's call, which re-prompts this source
/// on validation failure because it is [`interactive`].
///
/// [`interactive`]: MoveSource::interactive
pub struct HumanPlayer {
    name: String,
    input: Box<dyn BufRead>,
}

impl HumanPlayer {
    /// Prompt on stdin.
    pub fn new(name: impl Into<String>) -> Self {
        HumanPlayer {
            name: name.into(),
            input: Box::new(BufReader::new(io::stdin())),
        }
    }

    /// Prompt over an arbitrary reader; used by tests with scripted input.
    pub fn with_reader(name: impl Into<String>, input: Box<dyn BufRead>) -> Self {
        HumanPlayer {
            name: name.into(),
            input,
        }
    }

    fn read_number(&mut self, prompt: &str) -> Result<usize> {
        loop {
            print!("{}, {prompt}: ", self.name);
            let _ = io::stdout().flush();

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|source| Error::io("read move input", source))?;
            if read == 0 {
                return Err(Error::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Invalid input. Please try again."),
            }
        }
    }
}

impl MoveSource for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose_move(&mut self, _piles: &PileState) -> Result<Move> {
        loop {
            let pile = self.read_number("choose a pile index")?;
            if pile == 0 {
                // entries are one-based
                println!("Invalid input. Please try again.");
                continue;
            }
            let count = self.read_number("choose the number of objects to take")?;
            return Ok(Move::new(pile - 1, count));
        }
    }

    fn interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(name: &str, script: &str) -> HumanPlayer {
        HumanPlayer::with_reader(name, Box::new(Cursor::new(script.to_string())))
    }

    #[test]
    fn parses_one_based_pile_index_and_count() {
        let mut player = scripted("Player 1", "2\n3\n");
        let mv = player.propose_move(&PileState::new(vec![4, 4])).unwrap();
        assert_eq!(mv, Move::new(1, 3));
    }

    #[test]
    fn reasks_on_unparseable_or_zero_input() {
        let mut player = scripted("Player 1", "zero\n0\n1\n1\n");
        let mv = player.propose_move(&PileState::new(vec![4, 4])).unwrap();
        assert_eq!(mv, Move::new(0, 1));
    }

    #[test]
    fn closed_input_surfaces_an_error() {
        let mut player = scripted("Player 1", "");
        assert!(matches!(
            player.propose_move(&PileState::new(vec![4])),
            Err(Error::InputClosed)
        ));
    }
}
