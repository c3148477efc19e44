//! History heuristic for move ordering.
//!
//! Every time a move turns out best at a node, its entry grows by the square
//! of the remaining depth. Moves are then tried in descending history order.

use crate::board::square::SQUARE_COUNT;
use crate::chess_move::Move;

const HISTORY_SIZE: usize = SQUARE_COUNT * SQUARE_COUNT; // from * 90 + to

pub struct HistoryTable {
    table: Vec<u32>,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self {
            table: vec![0; HISTORY_SIZE],
        }
    }

    pub fn record_best(&mut self, mv: Move, depth: i32) {
        let bonus = (depth * depth) as u32;
        let entry = &mut self.table[mv.history_index()];
        *entry = entry.saturating_add(bonus);
    }

    #[inline]
    pub fn score(&self, mv: Move) -> u32 {
        self.table[mv.history_index()]
    }

    pub fn clear(&mut self) {
        for entry in self.table.iter_mut() {
            *entry = 0;
        }
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        Move::from_text(text).unwrap()
    }

    #[test]
    fn test_history_recording() {
        let mut history = HistoryTable::new();
        assert_eq!(history.score(mv("h2e2")), 0);

        history.record_best(mv("h2e2"), 3);
        assert_eq!(history.score(mv("h2e2")), 9);

        history.record_best(mv("h2e2"), 4);
        assert_eq!(history.score(mv("h2e2")), 25);
    }

    #[test]
    fn test_history_different_moves() {
        let mut history = HistoryTable::new();
        history.record_best(mv("h2e2"), 3);
        history.record_best(mv("b0c2"), 4);
        assert!(history.score(mv("b0c2")) > history.score(mv("h2e2")));
        assert_eq!(history.score(mv("e2h2")), 0);
    }

    #[test]
    fn test_history_clear() {
        let mut history = HistoryTable::new();
        history.record_best(mv("h2e2"), 3);
        history.clear();
        assert_eq!(history.score(mv("h2e2")), 0);
    }
}
