//! Xiangqi move ordering.
//!
//! Full-width nodes use a staged generator (`MoveSort`): the hash move, then
//! the two killers for the ply, then every remaining legal move sorted by
//! history. Quiescence nodes use `ordered_captures`, which scores captures by
//! victim value minus attacker value and drops the ones not worth searching.

use crate::board::Board;
use crate::chess_move::{Move, MoveList};
use crate::move_generator::{generate_moves, is_legal_move};

use super::history_table::HistoryTable;

/// Most valuable victim weights, indexed by `Piece::index`.
const MVV_VALUES: [i32; 7] = [50, 10, 10, 30, 40, 30, 20];
/// Least valuable attacker weights, indexed by `Piece::index`.
const LVA_VALUES: [i32; 7] = [5, 1, 1, 3, 4, 4, 2];

/// Captures scoring below this are not searched in quiescence.
const CAPTURE_PRUNE_SCORE: i32 = 10;
/// Captures landing in the mover's own half need at least this score.
const HOME_CAPTURE_PRUNE_SCORE: i32 = 20;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Phase {
    Hash,
    Killer1,
    Killer2,
    Generate,
    Rest,
}

pub struct MoveSort {
    phase: Phase,
    hash_move: Move,
    killers: [Move; 2],
    moves: MoveList,
    index: usize,
}

impl MoveSort {
    /// When the side to move is in check, every legal reply is generated up
    /// front (hash move first, the rest by history) and the killer phases are skipped.
    pub fn new(board: &mut Board, hash_move: Move, killers: [Move; 2], history: &HistoryTable) -> Self {
        if board.in_check() {
            let turn = board.turn();
            let mut moves = generate_moves(board, turn, true);
            moves.sort_by_key(|mv| {
                std::cmp::Reverse(if *mv == hash_move {
                    u32::MAX
                } else {
                    history.score(*mv)
                })
            });
            return Self {
                phase: Phase::Rest,
                hash_move: Move::NULL,
                killers: [Move::NULL; 2],
                moves,
                index: 0,
            };
        }

        Self {
            phase: Phase::Hash,
            hash_move,
            killers,
            moves: MoveList::new(),
            index: 0,
        }
    }

    pub fn next(&mut self, board: &mut Board, history: &HistoryTable) -> Option<Move> {
        loop {
            match self.phase {
                Phase::Hash => {
                    self.phase = Phase::Killer1;
                    if !self.hash_move.is_null() && is_legal_move(board, self.hash_move) {
                        return Some(self.hash_move);
                    }
                }
                Phase::Killer1 => {
                    self.phase = Phase::Killer2;
                    if let Some(killer) = self.usable_killer(board, 0) {
                        return Some(killer);
                    }
                }
                Phase::Killer2 => {
                    self.phase = Phase::Generate;
                    if let Some(killer) = self.usable_killer(board, 1) {
                        return Some(killer);
                    }
                }
                Phase::Generate => {
                    self.phase = Phase::Rest;
                    let turn = board.turn();
                    self.moves = generate_moves(board, turn, true);
                    self.moves
                        .sort_by_key(|mv| std::cmp::Reverse(history.score(*mv)));
                    self.index = 0;
                }
                Phase::Rest => {
                    while self.index < self.moves.len() {
                        let mv = self.moves[self.index];
                        self.index += 1;
                        if mv != self.hash_move && mv != self.killers[0] && mv != self.killers[1] {
                            return Some(mv);
                        }
                    }
                    return None;
                }
            }
        }
    }

    /// Killer `slot` if it is legal and distinct from the hash move.
    fn usable_killer(&self, board: &mut Board, slot: usize) -> Option<Move> {
        let killer = self.killers[slot];
        if !killer.is_null() && killer != self.hash_move && is_legal_move(board, killer) {
            Some(killer)
        } else {
            None
        }
    }
}

/// MVV/LVA score of capturing with `mv`. The destination must be occupied.
pub fn capture_score(board: &Board, mv: Move) -> i32 {
    let victim = board.get(mv.to).map_or(0, |(piece, _)| MVV_VALUES[piece.index()]);
    let attacker = board
        .get(mv.from)
        .map_or(0, |(piece, _)| LVA_VALUES[piece.index()]);
    victim - attacker
}

/// Legal captures for the side to move, best first, with low-value captures removed.
pub fn ordered_captures(board: &mut Board) -> MoveList {
    let side = board.turn();
    let captures = generate_moves(board, side, false);

    let mut scored: Vec<(i32, Move)> = captures
        .into_iter()
        .map(|mv| (capture_score(board, mv), mv))
        .collect();
    scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));

    scored
        .into_iter()
        .filter(|(score, mv)| {
            *score >= CAPTURE_PRUNE_SCORE
                && !(*score < HOME_CAPTURE_PRUNE_SCORE && mv.to.is_home_half(side))
        })
        .map(|(_, mv)| mv)
        .collect()
}

/// Every legal move for the side to move, sorted by history. Used by quiescence
/// search when in check.
pub fn moves_by_history(board: &mut Board, history: &HistoryTable) -> MoveList {
    let turn = board.turn();
    let mut moves = generate_moves(board, turn, true);
    moves.sort_by_key(|mv| std::cmp::Reverse(history.score(*mv)));
    moves
}
