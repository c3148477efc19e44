use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The two sides. Red sits on rows 5..=9 and moves first.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether `row` lies on this side's half of the river.
    pub fn is_home_row(&self, row: i8) -> bool {
        match self {
            Color::Red => row >= 5,
            Color::Black => row <= 4,
        }
    }

    /// Row delta of a forward pawn step.
    pub fn forward(&self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Color::Red)
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        match value {
            0 => Color::Red,
            1 => Color::Black,
            _ => panic!("Invalid color value: {} (must be 0 or 1)", value),
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Red => "red",
            Color::Black => "black",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "red" => Ok(Color::Red),
            "black" => Ok(Color::Black),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: red, black, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Color::ALL.contains(&Color::random()));
    }

    #[test]
    fn test_parse_red() {
        assert_eq!(Color::Red, Color::from_str("red").unwrap());
    }

    #[test]
    fn test_parse_black() {
        assert_eq!(Color::Black, Color::from_str("black").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::from_str("white").is_err());
    }

    #[test]
    fn test_color_from_u8() {
        assert_eq!(Color::from(0u8), Color::Red);
        assert_eq!(Color::from(1u8), Color::Black);
    }

    #[test]
    fn test_home_rows() {
        assert!(Color::Red.is_home_row(5));
        assert!(!Color::Red.is_home_row(4));
        assert!(Color::Black.is_home_row(4));
        assert!(!Color::Black.is_home_row(5));
    }
}
