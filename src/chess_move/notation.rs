//! Four-character move text: `<file><rank><file><rank>`, files `a..=i`, ranks `0..=9` from Red's side.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::Move;
use crate::board::square::Square;

static MOVE_TEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-i][0-9])([a-i][0-9])$").expect("MOVE_TEXT_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq)]
pub enum MoveParseError {
    #[error("invalid move text: {text:?}")]
    InvalidMoveText { text: String },
}

impl Move {
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn from_text(text: &str) -> Result<Move, MoveParseError> {
        let invalid = || MoveParseError::InvalidMoveText {
            text: text.to_string(),
        };
        let caps = MOVE_TEXT_RE.captures(text.trim()).ok_or_else(invalid)?;
        let from = Square::from_text(&caps[1]).ok_or_else(invalid)?;
        let to = Square::from_text(&caps[2]).ok_or_else(invalid)?;
        Ok(Move::new(from, to))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Move::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_central_cannon() {
        let mv = Move::from_text("h2e2").unwrap();
        assert_eq!(mv, Move::from_coords(7, 7, 7, 4));
        assert_eq!(mv.to_text(), "h2e2");
    }

    #[test]
    fn test_parse_black_horse() {
        let mv: Move = "b9c7".parse().unwrap();
        assert_eq!(mv, Move::from_coords(0, 1, 2, 2));
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["", "h2e", "h2e2x", "z2e2", "H2E2"].iter() {
            assert!(Move::from_text(text).is_err(), "{} should not parse", text);
        }
    }
}
