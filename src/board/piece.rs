use super::color::Color;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Piece {
    King = 0,
    Advisor = 1,
    Elephant = 2,
    Horse = 3,
    Chariot = 4,
    Cannon = 5,
    Pawn = 6,
}

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::King,
        Piece::Advisor,
        Piece::Elephant,
        Piece::Horse,
        Piece::Chariot,
        Piece::Cannon,
        Piece::Pawn,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn to_fen_char(&self, color: Color) -> char {
        let c = match self {
            Piece::King => 'k',
            Piece::Advisor => 'a',
            Piece::Elephant => 'b',
            Piece::Horse => 'n',
            Piece::Chariot => 'r',
            Piece::Cannon => 'c',
            Piece::Pawn => 'p',
        };
        match color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Accepts both the `b`/`n` and the `e`/`h` letterings for elephant and horse.
    pub fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'k' => Piece::King,
            'a' => Piece::Advisor,
            'b' | 'e' => Piece::Elephant,
            'n' | 'h' => Piece::Horse,
            'r' => Piece::Chariot,
            'c' => Piece::Cannon,
            'p' => Piece::Pawn,
            _ => return None,
        };
        Some((piece, color))
    }

    pub fn to_unicode_piece_char(&self, color: Color) -> char {
        match (self, color) {
            (Piece::King, Color::Red) => '帥',
            (Piece::Advisor, Color::Red) => '仕',
            (Piece::Elephant, Color::Red) => '相',
            (Piece::Horse, Color::Red) => '傌',
            (Piece::Chariot, Color::Red) => '俥',
            (Piece::Cannon, Color::Red) => '炮',
            (Piece::Pawn, Color::Red) => '兵',
            (Piece::King, Color::Black) => '將',
            (Piece::Advisor, Color::Black) => '士',
            (Piece::Elephant, Color::Black) => '象',
            (Piece::Horse, Color::Black) => '馬',
            (Piece::Chariot, Color::Black) => '車',
            (Piece::Cannon, Color::Black) => '砲',
            (Piece::Pawn, Color::Black) => '卒',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_chars_round_trip() {
        for piece in Piece::ALL.iter() {
            for color in Color::ALL.iter() {
                let c = piece.to_fen_char(*color);
                assert_eq!(Piece::from_fen_char(c), Some((*piece, *color)));
            }
        }
    }

    #[test]
    fn test_alternate_letters() {
        assert_eq!(
            Piece::from_fen_char('E'),
            Some((Piece::Elephant, Color::Red))
        );
        assert_eq!(Piece::from_fen_char('h'), Some((Piece::Horse, Color::Black)));
        assert_eq!(Piece::from_fen_char('q'), None);
    }
}
