//! FEN serialization - converts Board to board text.

use crate::board::color::Color;
use crate::board::square::{Square, COLS, ROWS};
use crate::board::Board;

/// Converts a Board to board text: placement, side to move, then fixed placeholder fields.
pub fn to_fen(board: &Board) -> String {
    let mut fen = String::new();

    for row in 0..ROWS {
        let mut empty_count = 0;
        for col in 0..COLS {
            if let Some((piece, color)) = board.get(Square::new(row, col)) {
                if empty_count > 0 {
                    fen.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                fen.push(piece.to_fen_char(color));
            } else {
                empty_count += 1;
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if row < ROWS - 1 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match board.turn() {
        Color::Red => 'w',
        Color::Black => 'b',
    });
    fen.push_str(" - - 0 1");

    fen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::Move;
    use crate::input_handler::fen::STARTING_POSITION_FEN;

    #[test]
    fn test_starting_position_fen() {
        let board = Board::starting_position();
        assert_eq!(to_fen(&board), STARTING_POSITION_FEN);
    }

    #[test]
    fn test_roundtrip() {
        let original_fen = "2bak4/4a4/4b1n2/p1N1p3p/6p2/2P6/P3P1c1P/2C1C1N2/4A4/2BAK1B2 b - - 0 1";
        let board: Board = original_fen.parse().unwrap();
        assert_eq!(to_fen(&board), original_fen);
    }

    #[test]
    fn test_side_to_move_after_move() {
        let mut board = Board::starting_position();
        board.make_move(Move::from_text("h2e2").unwrap());
        assert_eq!(
            to_fen(&board),
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C2C4/9/RNBAKABNR b - - 0 1"
        );
    }

    #[test]
    fn test_trailing_fields_are_normalized() {
        let board: Board = "4k4/9/9/9/9/9/9/9/9/3K5 w - - 12 40".parse().unwrap();
        assert_eq!(to_fen(&board), "4k4/9/9/9/9/9/9/9/9/3K5 w - - 0 1");
    }
}
