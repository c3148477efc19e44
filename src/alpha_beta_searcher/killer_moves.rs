//! Killer move storage.

use crate::chess_move::Move;

use super::LIMIT_DEPTH;

/// Two killer moves per ply.
///
/// Killer moves are moves that proved best at the same ply in other
/// branches of the search tree, so they are tried right after the hash move.
pub(crate) struct KillerMoves {
    table: Vec<[Move; 2]>,
}

impl KillerMoves {
    pub fn new() -> Self {
        Self {
            table: vec![[Move::NULL; 2]; LIMIT_DEPTH as usize + 1],
        }
    }

    pub fn store(&mut self, ply: i32, killer: Move) {
        let slot = &mut self.table[ply as usize];
        if slot[0] != killer {
            slot[1] = slot[0];
            slot[0] = killer;
        }
    }

    pub fn get(&self, ply: i32) -> [Move; 2] {
        self.table[ply as usize]
    }

    pub fn clear(&mut self) {
        for killers in self.table.iter_mut() {
            *killers = [Move::NULL; 2];
        }
    }
}
