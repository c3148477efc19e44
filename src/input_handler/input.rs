//! Move input parsing and validation.

use std::io::{self, BufRead};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::chess_move::Move;

static ENGINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(go|engine|hint)$").expect("ENGINE_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Coordinate { mv: Move },
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if trimmed == "q" || trimmed == "quit" {
            return Err(InputError::UserExit);
        }

        if let Ok(mv) = Move::from_text(&trimmed) {
            return Ok(MoveInput::Coordinate { mv });
        }

        if ENGINE_RE.is_match(&trimmed) {
            return Ok(MoveInput::UseEngine);
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one line from stdin and parses it as a move (`h2e2`), a request for an
/// engine move (`go`), or a request to quit (`q`).
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_move() {
        let input: MoveInput = "h2e2".parse().unwrap();
        assert_eq!(
            input,
            MoveInput::Coordinate {
                mv: Move::from_text("h2e2").unwrap()
            }
        );
        let input: MoveInput = "  B0C2\n".parse().unwrap();
        assert_eq!(
            input,
            MoveInput::Coordinate {
                mv: Move::from_text("b0c2").unwrap()
            }
        );
    }

    #[test]
    fn test_parse_engine_request() {
        assert_eq!("go".parse::<MoveInput>().unwrap(), MoveInput::UseEngine);
        assert_eq!("hint".parse::<MoveInput>().unwrap(), MoveInput::UseEngine);
    }

    #[test]
    fn test_parse_quit() {
        assert!(matches!("q".parse::<MoveInput>(), Err(InputError::UserExit)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "j2e2".parse::<MoveInput>(),
            Err(InputError::InvalidInput { .. })
        ));
        assert!(matches!(
            "e2".parse::<MoveInput>(),
            Err(InputError::InvalidInput { .. })
        ));
        assert!(matches!(
            "h2e2x".parse::<MoveInput>(),
            Err(InputError::InvalidInput { .. })
        ));
    }
}
