//! Fixed-size transposition table indexed by the low bits of the position key.

use crate::board::Board;
use crate::chess_move::Move;
use crate::evaluate::{BAN_VALUE, WIN_VALUE};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BoundType {
    /// The score is exact.
    Exact,
    /// The search failed high; the true score is at least this.
    Lower,
    /// The search failed low; the true score is at most this.
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct HashEntry {
    pub lock: u32,
    pub depth: i32,
    pub bound_type: BoundType,
    pub score: i32,
    pub best_move: Move,
}

impl Default for HashEntry {
    fn default() -> Self {
        Self {
            lock: 0,
            depth: 0,
            bound_type: BoundType::Upper,
            score: 0,
            best_move: Move::NULL,
        }
    }
}

pub const DEFAULT_HASH_BITS: u8 = 20;

pub struct TranspositionTable {
    entries: Vec<HashEntry>,
    mask: usize,
    hits: usize,
    depth_rejected: usize,
    bound_rejected: usize,
    overwrites: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_BITS)
    }
}

impl TranspositionTable {
    pub fn new(hash_bits: u8) -> Self {
        let size = 1usize << hash_bits;
        Self {
            entries: vec![HashEntry::default(); size],
            mask: size - 1,
            hits: 0,
            depth_rejected: 0,
            bound_rejected: 0,
            overwrites: 0,
        }
    }

    #[inline]
    fn slot(&self, board: &Board) -> usize {
        board.key() as usize & self.mask
    }

    /// Looks up the current position. Returns a score usable for a cutoff at
    /// `depth` inside `(alpha, beta)` if there is one, and the stored best move
    /// (or `Move::NULL`) for ordering either way.
    pub fn probe(&mut self, board: &Board, alpha: i32, beta: i32, depth: i32) -> (Option<i32>, Move) {
        let entry = self.entries[self.slot(board)];
        if entry.lock != board.lock() {
            return (None, Move::NULL);
        }

        let best_move = entry.best_move;
        let mut score = entry.score;
        let mut mate = false;
        if score > WIN_VALUE {
            if score <= BAN_VALUE {
                return (None, best_move);
            }
            score -= board.distance();
            mate = true;
        } else if score < -WIN_VALUE {
            if score >= -BAN_VALUE {
                return (None, best_move);
            }
            score += board.distance();
            mate = true;
        } else if score == board.draw_value() {
            return (None, best_move);
        }

        if entry.depth < depth && !mate {
            self.depth_rejected += 1;
            return (None, best_move);
        }

        let usable = match entry.bound_type {
            BoundType::Exact => true,
            BoundType::Lower => score >= beta,
            BoundType::Upper => score <= alpha,
        };
        if usable {
            self.hits += 1;
            (Some(score), best_move)
        } else {
            self.bound_rejected += 1;
            (None, best_move)
        }
    }

    /// Stores a search result for the current position, keeping deeper entries.
    /// Mate scores are stored relative to this node so they stay valid at any distance.
    pub fn record(&mut self, board: &Board, bound_type: BoundType, score: i32, depth: i32, best_move: Move) {
        let slot = self.slot(board);
        if self.entries[slot].depth > depth {
            return;
        }

        let stored = if score > WIN_VALUE {
            if best_move.is_null() && score <= BAN_VALUE {
                return;
            }
            score + board.distance()
        } else if score < -WIN_VALUE {
            if best_move.is_null() && score >= -BAN_VALUE {
                return;
            }
            score - board.distance()
        } else if score == board.draw_value() && best_move.is_null() {
            return;
        } else {
            score
        };

        let entry = &mut self.entries[slot];
        if entry.lock != 0 && entry.lock != board.lock() {
            self.overwrites += 1;
        }
        *entry = HashEntry {
            lock: board.lock(),
            depth,
            bound_type,
            score: stored,
            best_move,
        };
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = HashEntry::default();
        }
        self.hits = 0;
        self.depth_rejected = 0;
        self.bound_rejected = 0;
        self.overwrites = 0;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn depth_rejected(&self) -> usize {
        self.depth_rejected
    }

    pub fn bound_rejected(&self) -> usize {
        self.bound_rejected
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites
    }
}
