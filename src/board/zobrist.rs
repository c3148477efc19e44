use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::color::Color;
use super::piece::Piece;
use super::square::{Square, SQUARE_COUNT};

// Zobrist board hashing, two independent 32-bit streams
// * One number for each (color, piece, square) triple ( 2 * 7 * 90 )
// * One number to indicate the side to move is black
//
// The key indexes the transposition table, the lock verifies the entry.

const ZOBRIST_SEED: u64 = 0x5851_f42d_4c95_7f2d;

pub(crate) static ZOBRIST: Lazy<Zobrist> = Lazy::new(|| Zobrist::new(ZOBRIST_SEED));

pub(crate) struct Zobrist {
    keys: ZobristStream,
    locks: ZobristStream,
}

struct ZobristStream {
    pieces: Vec<u32>,
    black_to_move: u32,
}

impl ZobristStream {
    fn generate(rng: &mut StdRng) -> Self {
        Self {
            pieces: (0..2 * Piece::ALL.len() * SQUARE_COUNT)
                .map(|_| rng.gen::<u32>())
                .collect(),
            black_to_move: rng.gen::<u32>(),
        }
    }

    fn piece_square_num(&self, piece: Piece, color: Color, square: Square) -> u32 {
        self.pieces[index_of(piece, color, square)]
    }
}

impl Zobrist {
    fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let keys = ZobristStream::generate(&mut rng);
        let locks = ZobristStream::generate(&mut rng);
        Self { keys, locks }
    }

    /// (key, lock) contribution of a piece on a square.
    pub fn piece_square(&self, piece: Piece, color: Color, square: Square) -> (u32, u32) {
        (
            self.keys.piece_square_num(piece, color, square),
            self.locks.piece_square_num(piece, color, square),
        )
    }

    /// (key, lock) contribution of black being the side to move.
    pub fn side_to_move(&self) -> (u32, u32) {
        (self.keys.black_to_move, self.locks.black_to_move)
    }
}

fn index_of(piece: Piece, color: Color, square: Square) -> usize {
    (color.index() * Piece::ALL.len() + piece.index()) * SQUARE_COUNT + square.index()
}
