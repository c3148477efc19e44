use crate::board::{color::Color, error::BoardError, piece::Piece, square::Square, Board};
use crate::board::square::{COLS, ROWS};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FenParseError {
    #[error("Missing piece placement")]
    MissingPlacement,
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of ranks: 10 expected, {rank_count:?} given")]
    InvalidRankCount { rank_count: usize },
    #[error("Rank too long: {invalid_rank:?}")]
    InvalidRankLength { invalid_rank: String },
    #[error("Error placing piece: {board_error:?}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Rank incomplete: {incomplete_rank:?}")]
    IncompleteRank { incomplete_rank: String },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

/// Parses board text into a Board.
///
/// Only the first two fields are read: the piece placement, ranks listed from
/// Black's back rank down to Red's, and the side to move. A missing side field
/// means Red to move. Anything after that (placeholders, move counters, a
/// `moves ...` tail) is ignored.
pub fn parse_fen(fen: &str) -> FenResult<Board> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenParseError::MissingPlacement)?;
    let mut board = Board::new();

    parse_piece_placement(&mut board, placement)?;
    parse_active_color(&mut board, fields.next().unwrap_or("w"))?;

    Ok(board)
}

/// Parses the piece placement section of the FEN string
fn parse_piece_placement(board: &mut Board, placement: &str) -> FenResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != ROWS as usize {
        return Err(FenParseError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    for (row, rank) in ranks.iter().enumerate() {
        parse_rank(board, rank, row as i8)?;
    }

    Ok(())
}

/// Parses a single rank of the piece placement section
fn parse_rank(board: &mut Board, rank: &str, row: i8) -> FenResult<()> {
    let mut col = 0i8;

    for c in rank.chars() {
        if col >= COLS {
            return Err(FenParseError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            });
        }

        if let Some(empty_squares) = c.to_digit(10) {
            col += empty_squares as i8;
        } else {
            let (piece, color) = Piece::from_fen_char(c).ok_or(
                FenParseError::InvalidPieceCharacter {
                    invalid_character: c,
                },
            )?;
            board
                .put(Square::new(row, col), piece, color)
                .map_err(|e| FenParseError::ErrorPlacingPiece { board_error: e })?;
            col += 1;
        }
    }

    if col > COLS {
        return Err(FenParseError::InvalidRankLength {
            invalid_rank: rank.to_string(),
        });
    }
    if col != COLS {
        return Err(FenParseError::IncompleteRank {
            incomplete_rank: rank.to_string(),
        });
    }

    Ok(())
}

/// Parses the active color field. `r` is accepted as an alias for Red.
fn parse_active_color(board: &mut Board, active_color: &str) -> FenResult<()> {
    let color = match active_color {
        "w" | "r" => Color::Red,
        "b" => Color::Black,
        _ => {
            return Err(FenParseError::InvalidColor {
                invalid_color: active_color.to_string(),
            })
        }
    };
    board.set_turn(color);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_starting_position() {
        let board: Board = STARTING_POSITION_FEN.parse().unwrap();
        let expected = Board::starting_position();
        assert_eq!(board, expected);
        assert_eq!(board.key(), expected.key());
        assert_eq!(board.lock(), expected.lock());
        assert_eq!(board.score(Color::Red), expected.score(Color::Red));
    }

    #[test]
    fn test_parse_position_with_black_to_move() {
        let fen = "3k5/9/9/9/9/9/9/9/4R4/4K4 b - - 0 1";
        let board = parse_fen(fen).unwrap();

        assert_eq!(board.turn(), Color::Black);
        assert_eq!(
            board.get(Square::new(0, 3)),
            Some((Piece::King, Color::Black))
        );
        assert_eq!(
            board.get(Square::new(8, 4)),
            Some((Piece::Chariot, Color::Red))
        );
        assert_eq!(board.get(Square::new(9, 4)), Some((Piece::King, Color::Red)));
    }

    #[test]
    fn test_alternative_letters_and_trailing_fields() {
        let fen = "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR r - - 0 1 moves h2e2";
        let board = parse_fen(fen).unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn test_missing_side_defaults_to_red() {
        let board = parse_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR").unwrap();
        assert_eq!(board.turn(), Color::Red);
    }

    #[test]
    fn test_invalid_fen() {
        assert_eq!(parse_fen(""), Err(FenParseError::MissingPlacement));

        assert_eq!(
            parse_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/RNBAKABNR w"),
            Err(FenParseError::InvalidRankCount { rank_count: 9 })
        );

        assert_eq!(
            parse_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABN w"),
            Err(FenParseError::IncompleteRank {
                incomplete_rank: "RNBAKABN".to_string()
            })
        );

        assert_eq!(
            parse_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNRR w"),
            Err(FenParseError::InvalidRankLength {
                invalid_rank: "RNBAKABNRR".to_string()
            })
        );

        assert_eq!(
            parse_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBQKABNR w"),
            Err(FenParseError::InvalidPieceCharacter {
                invalid_character: 'Q'
            })
        );

        assert_eq!(
            parse_fen("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR x"),
            Err(FenParseError::InvalidColor {
                invalid_color: "x".to_string()
            })
        );
    }

    #[test]
    fn test_overlong_digit_run() {
        assert_eq!(
            parse_fen("4k5/9/9/9/9/9/9/9/9/4K4 w"),
            Err(FenParseError::InvalidRankLength {
                invalid_rank: "4k5".to_string()
            })
        );
    }
}
