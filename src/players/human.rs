//! Human player that types a keypad number on the console.

use super::Player;
use crate::Console;
use crate::games::noughts::{Board, Position};
use anyhow::Result;
use tracing::{debug, instrument};

/// Human player reading moves from console input.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NotANumber,
    OutOfRange,
    Taken,
}

impl Rejection {
    fn message(self) -> &'static str {
        match self {
            Rejection::NotANumber => "Invalid input. Please enter a number.",
            Rejection::OutOfRange => "Invalid move. Choose a number between 1 and 9.",
            Rejection::Taken => "Square already taken. Choose another one.",
        }
    }
}

/// True for an optionally signed run of ASCII digits, however long.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_move(line: &str, board: &Board) -> Result<Position, Rejection> {
    let text = line.trim();
    let key: i64 = text.parse().map_err(|_| {
        if is_integer(text) {
            Rejection::OutOfRange
        } else {
            Rejection::NotANumber
        }
    })?;
    let pos = Position::from_key(key).ok_or(Rejection::OutOfRange)?;
    if board.is_empty(pos) {
        Ok(pos)
    } else {
        Err(Rejection::Taken)
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, board, console), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, console: &mut Console) -> Result<Position> {
        loop {
            console.say("                    1 2 3")?;
            console.say("                    4 5 6")?;
            let Some(line) = console.prompt("Choose your square: 7 8 9 : ")? else {
                anyhow::bail!("Input closed");
            };

            match parse_move(&line, board) {
                Ok(pos) => {
                    debug!(position = ?pos, "Human chose position");
                    return Ok(pos);
                }
                Err(rejection) => {
                    debug!(input = %line, ?rejection, "Rejected move");
                    console.say(rejection.message())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transcript;
    use std::io::Cursor;

    #[test]
    fn test_parse_move_accepts_padded_number() {
        assert_eq!(parse_move(" 5 ", &Board::new()), Ok(Position::Center));
    }

    #[test]
    fn test_parse_move_rejections() {
        let board = Board::from_rows([['X', ' ', ' '], [' ', ' ', ' '], [' ', ' ', ' ']]);
        assert_eq!(parse_move("abc", &board), Err(Rejection::NotANumber));
        assert_eq!(parse_move("", &board), Err(Rejection::NotANumber));
        assert_eq!(parse_move("2.5", &board), Err(Rejection::NotANumber));
        assert_eq!(parse_move("0", &board), Err(Rejection::OutOfRange));
        assert_eq!(parse_move("10", &board), Err(Rejection::OutOfRange));
        assert_eq!(parse_move("-1", &board), Err(Rejection::OutOfRange));
        assert_eq!(parse_move("1", &board), Err(Rejection::Taken));
    }

    #[test]
    fn test_parse_move_huge_number_is_out_of_range() {
        let board = Board::new();
        assert_eq!(
            parse_move("99999999999999999999", &board),
            Err(Rejection::OutOfRange)
        );
        assert_eq!(
            parse_move("-99999999999999999999", &board),
            Err(Rejection::OutOfRange)
        );
        assert_eq!(parse_move("+", &board), Err(Rejection::NotANumber));
        assert_eq!(parse_move("1e5", &board), Err(Rejection::NotANumber));
    }

    #[test]
    fn test_huge_number_then_legal_move() {
        let transcript = Transcript::new();
        let mut console =
            Console::new(Cursor::new("99999999999999999999\n5\n"), transcript.clone());
        let mut human = HumanPlayer::new("Human");

        assert_eq!(human.choose_move(&Board::new(), &mut console).unwrap(), Position::Center);
        let out = transcript.contents();
        assert!(out.contains("Invalid move. Choose a number between 1 and 9."));
        assert!(!out.contains("Invalid input."));
    }

    #[test]
    fn test_undecodable_input_is_not_a_number() {
        let transcript = Transcript::new();
        let mut console = Console::new(Cursor::new(&b"\xff\n5\n"[..]), transcript.clone());
        let mut human = HumanPlayer::new("Human");

        assert_eq!(human.choose_move(&Board::new(), &mut console).unwrap(), Position::Center);
        assert!(transcript.contents().contains("Invalid input. Please enter a number."));
    }

    #[test]
    fn test_reprompts_until_legal() {
        let board = Board::from_rows([['X', ' ', ' '], [' ', ' ', ' '], [' ', ' ', ' ']]);
        let transcript = Transcript::new();
        let mut console = Console::new(Cursor::new("foo\n42\n1\n9\n"), transcript.clone());
        let mut human = HumanPlayer::new("Human");

        let pos = human.choose_move(&board, &mut console).unwrap();
        assert_eq!(pos, Position::BottomRight);

        let out = transcript.contents();
        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Invalid move. Choose a number between 1 and 9."));
        assert!(out.contains("Square already taken. Choose another one."));
        assert_eq!(out.matches("Choose your square").count(), 4);
    }

    #[test]
    fn test_input_closed_is_an_error() {
        let mut console = Console::new(Cursor::new("x\n"), Transcript::new());
        let mut human = HumanPlayer::new("Human");
        assert!(human.choose_move(&Board::new(), &mut console).is_err());
        assert!(console.is_closed());
    }
}
