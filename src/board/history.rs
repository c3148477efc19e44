use super::color::Color;
use super::piece::Piece;
use crate::chess_move::Move;

/// Four parallel stacks, one entry per ply since the last irreversible point.
/// Entry 0 is a sentinel holding the null move, so the repetition walk and
/// `in_check` never run off the bottom.
#[derive(Clone, Debug)]
pub struct MoveHistory {
    moves: Vec<Move>,
    captures: Vec<Option<(Piece, Color)>>,
    keys: Vec<u32>,
    checks: Vec<bool>,
}

impl MoveHistory {
    pub fn new(key: u32, in_check: bool) -> Self {
        let mut history = Self {
            moves: Vec::with_capacity(256),
            captures: Vec::with_capacity(256),
            keys: Vec::with_capacity(256),
            checks: Vec::with_capacity(256),
        };
        history.push(Move::NULL, None, key, in_check);
        history
    }

    pub fn reset(&mut self, key: u32, in_check: bool) {
        self.moves.clear();
        self.captures.clear();
        self.keys.clear();
        self.checks.clear();
        self.push(Move::NULL, None, key, in_check);
    }

    /// `key_before` is the key of the position the move was played from,
    /// `gives_check` whether the side now to move is in check.
    pub fn push(
        &mut self,
        mv: Move,
        captured: Option<(Piece, Color)>,
        key_before: u32,
        gives_check: bool,
    ) {
        self.moves.push(mv);
        self.captures.push(captured);
        self.keys.push(key_before);
        self.checks.push(gives_check);
    }

    pub fn pop(&mut self) -> (Move, Option<(Piece, Color)>, u32) {
        assert!(self.moves.len() > 1, "MoveHistory has nothing to undo");
        self.checks.pop();
        let key = self.keys.pop().expect("MoveHistory stacks should stay aligned");
        let captured = self
            .captures
            .pop()
            .expect("MoveHistory stacks should stay aligned");
        let mv = self.moves.pop().expect("MoveHistory stacks should stay aligned");
        (mv, captured, key)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn in_check(&self) -> bool {
        *self.checks.last().expect("MoveHistory should never be empty")
    }

    pub fn last_move(&self) -> Move {
        *self.moves.last().expect("MoveHistory should never be empty")
    }

    pub fn last_capture(&self) -> Option<(Piece, Color)> {
        *self.captures.last().expect("MoveHistory should never be empty")
    }

    pub fn move_at(&self, index: usize) -> Move {
        self.moves[index]
    }

    pub fn capture_at(&self, index: usize) -> Option<(Piece, Color)> {
        self.captures[index]
    }

    pub fn key_at(&self, index: usize) -> u32 {
        self.keys[index]
    }

    pub fn check_at(&self, index: usize) -> bool {
        self.checks[index]
    }

    /// Real moves since the sentinel, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves[1..]
    }
}
