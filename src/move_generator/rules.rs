//! Per-piece movement rules and check detection.

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;

/// Whether the piece on `from` may move to `to` under its movement rule, given the
/// current occupancy. Does not consider whether the move exposes the mover's king.
pub fn can_move(board: &Board, from: Square, to: Square) -> bool {
    debug_assert!(from.is_on_board() && to.is_on_board());

    let (piece, color) = match board.get(from) {
        Some(piece) => piece,
        None => return false,
    };
    if from == to {
        return false;
    }
    if let Some((_, target_color)) = board.get(to) {
        if target_color == color {
            return false;
        }
    }

    let d_row = to.row - from.row;
    let d_col = to.col - from.col;

    match piece {
        Piece::King => to.is_in_palace(color) && d_row.abs() + d_col.abs() == 1,
        Piece::Advisor => to.is_in_palace(color) && d_row.abs() == 1 && d_col.abs() == 1,
        Piece::Elephant => {
            d_row.abs() == 2
                && d_col.abs() == 2
                && to.is_home_half(color)
                && !board.is_occupied(from.offset(d_row / 2, d_col / 2))
        }
        Piece::Horse => {
            let leg = match (d_row.abs(), d_col.abs()) {
                (2, 1) => from.offset(d_row / 2, 0),
                (1, 2) => from.offset(0, d_col / 2),
                _ => return false,
            };
            !board.is_occupied(leg)
        }
        Piece::Chariot => {
            (d_row == 0 || d_col == 0) && count_pieces_between(board, from, to) == 0
        }
        Piece::Cannon => {
            if d_row != 0 && d_col != 0 {
                return false;
            }
            let screens = count_pieces_between(board, from, to);
            if board.is_occupied(to) {
                screens == 1
            } else {
                screens == 0
            }
        }
        Piece::Pawn => {
            if d_col == 0 {
                d_row == color.forward()
            } else {
                d_row == 0 && d_col.abs() == 1 && !from.is_home_half(color)
            }
        }
    }
}

/// Occupied squares strictly between two squares on the same row or column.
pub fn count_pieces_between(board: &Board, from: Square, to: Square) -> usize {
    debug_assert!(from.row == to.row || from.col == to.col);
    let d_row = (to.row - from.row).signum();
    let d_col = (to.col - from.col).signum();
    let mut square = from.offset(d_row, d_col);
    let mut count = 0;
    while square != to {
        if board.is_occupied(square) {
            count += 1;
        }
        square = square.offset(d_row, d_col);
    }
    count
}

/// Whether `attacking_side` is giving check. Kings facing each other on an open
/// file count as check as well.
pub fn is_in_check(board: &Board, attacking_side: Color) -> bool {
    let defending_king = match board.find_king(attacking_side.opposite()) {
        Some(square) => square,
        None => return false,
    };

    if let Some(attacking_king) = board.find_king(attacking_side) {
        if attacking_king.col == defending_king.col
            && count_pieces_between(board, attacking_king, defending_king) == 0
        {
            return true;
        }
    }

    board
        .pieces(attacking_side)
        .any(|(square, _)| can_move(board, square, defending_king))
}
