//! Xiangqi move generation.

mod rules;
mod targets;

#[cfg(test)]
mod tests;

pub use rules::{can_move, count_pieces_between, is_in_check};

use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::{Move, MoveList};

use targets::candidate_targets;

/// Every move of `side` allowed by the movement rules that does not leave
/// `side`'s king in check. With `include_all` false, only captures are returned.
pub fn generate_moves(board: &mut Board, side: Color, include_all: bool) -> MoveList {
    let pieces: SmallVec<[(Square, Piece); 16]> = board.pieces(side).collect();
    let mut moves = MoveList::new();

    for (from, piece) in pieces {
        for to in candidate_targets(piece, side, from) {
            if !include_all && !board.is_occupied(to) {
                continue;
            }
            if !can_move(board, from, to) {
                continue;
            }
            let mv = Move::new(from, to);
            if leaves_king_safe(board, mv, side) {
                moves.push(mv);
            }
        }
    }

    moves
}

/// Whether `mv` is fully legal for the side to move. Used to validate moves that
/// come from outside the generator, such as hash moves, killers and user input.
pub fn is_legal_move(board: &mut Board, mv: Move) -> bool {
    if mv.is_null() || !mv.from.is_on_board() || !mv.to.is_on_board() {
        return false;
    }
    let side = board.turn();
    match board.get(mv.from) {
        Some((_, color)) if color == side => {}
        _ => return false,
    }
    can_move(board, mv.from, mv.to) && leaves_king_safe(board, mv, side)
}

fn leaves_king_safe(board: &mut Board, mv: Move, side: Color) -> bool {
    !board.with_move_applied(mv, |board| is_in_check(board, side.opposite()))
}

/// Counts the leaf positions `depth` plies below the current position.
pub fn count_positions(board: &mut Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let turn = board.turn();
    let candidates = generate_moves(board, turn, true);
    if depth == 1 {
        return candidates.len();
    }

    let mut count = 0;
    for mv in candidates {
        board.make_move(mv);
        count += count_positions(board, depth - 1);
        board.unmake_move();
    }
    count
}
