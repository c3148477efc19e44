pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;
mod history;
mod repetition;
pub(crate) mod zobrist;


use std::str::FromStr;

pub use color::Color;
use error::BoardError;
use history::MoveHistory;
pub use piece::Piece;
pub use repetition::Repetition;
pub use square::Square;
use zobrist::ZOBRIST;

use crate::chess_move::Move;
use crate::evaluate::evaluation_tables::piece_square_value;
use crate::evaluate::{BAN_VALUE, DRAW_VALUE, MATE_VALUE};
use crate::input_handler::fen::{parse_fen, FenParseError};
use crate::move_generator;
use crate::xiangqi_position;

/// The full game position: a 10x9 grid plus the incrementally maintained
/// per-side scores, the Zobrist key/lock pair and the move history used for
/// unmake and repetition detection.
///
/// Every piece placement or removal goes through `toggle_piece`, so the
/// scores and hashes always describe exactly the pieces on the grid.
#[derive(Clone)]
pub struct Board {
    grid: [[Option<(Piece, Color)>; 9]; 10],
    turn: Color,
    scores: [i32; 2],
    key: u32,
    lock: u32,
    history: MoveHistory,
    distance: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [[None; 9]; 10],
            turn: Color::Red,
            scores: [0; 2],
            key: 0,
            lock: 0,
            history: MoveHistory::new(0, false),
            distance: 0,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        xiangqi_position! {
            rnbakabnr
            .........
            .c.....c.
            p.p.p.p.p
            .........
            .........
            P.P.P.P.P
            .C.....C.
            .........
            RNBAKABNR
        }
    }

    #[inline(always)]
    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        debug_assert!(square.is_on_board(), "off-board square {:?}", square);
        self.grid[square.row as usize][square.col as usize]
    }

    #[inline(always)]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if !square.is_on_board() {
            return Err(BoardError::SquareOffBoardError { square });
        }
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }
        self.grid[square.row as usize][square.col as usize] = Some((piece, color));
        self.toggle_piece(square, piece, color, true);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<(Piece, Color)> {
        let (piece, color) = self.get(square)?;
        self.grid[square.row as usize][square.col as usize] = None;
        self.toggle_piece(square, piece, color, false);
        Some((piece, color))
    }

    /// Adds or subtracts a piece's score and XORs its hash terms.
    fn toggle_piece(&mut self, square: Square, piece: Piece, color: Color, add: bool) {
        let value = piece_square_value(piece, color, square);
        if add {
            self.scores[color.index()] += value;
        } else {
            self.scores[color.index()] -= value;
        }
        let (key, lock) = ZOBRIST.piece_square(piece, color, square);
        self.key ^= key;
        self.lock ^= lock;
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    fn toggle_turn(&mut self) -> Color {
        let (key, lock) = ZOBRIST.side_to_move();
        self.key ^= key;
        self.lock ^= lock;
        self.turn = self.turn.opposite();
        self.turn
    }

    /// Sets the side to move. This is a setup operation, so the history is reset.
    pub fn set_turn(&mut self, turn: Color) -> Color {
        if self.turn != turn {
            self.toggle_turn();
        }
        self.set_irreversible();
        turn
    }

    pub fn score(&self, color: Color) -> i32 {
        self.scores[color.index()]
    }

    /// Transposition table index source.
    pub fn key(&self) -> u32 {
        self.key
    }

    /// Transposition table collision check.
    pub fn lock(&self) -> u32 {
        self.lock
    }

    /// Plies made since the last `reset_distance`.
    pub fn distance(&self) -> i32 {
        self.distance
    }

    pub fn reset_distance(&mut self) {
        self.distance = 0;
    }

    /// Whether the side to move is in check, as recorded when the last move was made.
    pub fn in_check(&self) -> bool {
        self.history.in_check()
    }

    pub fn last_move(&self) -> Option<Move> {
        let mv = self.history.last_move();
        if mv.is_null() {
            None
        } else {
            Some(mv)
        }
    }

    /// Whether the last move captured something.
    pub fn last_move_captured(&self) -> bool {
        self.history.last_capture().is_some()
    }

    /// Plies recorded since the last irreversible point.
    pub fn reversible_plies(&self) -> usize {
        self.history.len() - 1
    }

    pub fn history_moves(&self) -> &[Move] {
        self.history.moves()
    }

    /// Forgets the move history. Used after captures in a real game and after setup,
    /// since no earlier position can repeat.
    pub fn set_irreversible(&mut self) {
        let in_check = move_generator::is_in_check(self, self.turn.opposite());
        self.history.reset(self.key, in_check);
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let rows = match color {
            Color::Red => 7..=9,
            Color::Black => 0..=2,
        };
        for row in rows {
            for col in 3..=5 {
                let square = Square::new(row, col);
                if self.get(square) == Some((Piece::King, color)) {
                    return Some(square);
                }
            }
        }
        None
    }

    /// Every occupied square of one side.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get(square) {
            Some((piece, c)) if c == color => Some((square, piece)),
            _ => None,
        })
    }

    /// Applies `mv` for the side to move, returning the captured piece.
    /// Panics if the source square is empty.
    pub fn make_move(&mut self, mv: Move) -> Option<(Piece, Color)> {
        let key_before = self.key;
        let (piece, color) = self
            .remove(mv.from)
            .unwrap_or_else(|| panic!("no piece on {} to make move {}", mv.from, mv));
        debug_assert_eq!(color, self.turn, "move {} is not for the side to move", mv);
        let captured = self.remove(mv.to);
        self.grid[mv.to.row as usize][mv.to.col as usize] = Some((piece, color));
        self.toggle_piece(mv.to, piece, color, true);
        self.toggle_turn();
        let gives_check = move_generator::is_in_check(self, color);
        self.history.push(mv, captured, key_before, gives_check);
        self.distance += 1;
        captured
    }

    /// Reverses the most recent `make_move`.
    pub fn unmake_move(&mut self) {
        let (mv, captured, key_before) = self.history.pop();
        debug_assert!(!mv.is_null(), "unmake_move called on a null move");
        self.distance -= 1;
        self.toggle_turn();
        let (piece, color) = self
            .remove(mv.to)
            .unwrap_or_else(|| panic!("no piece on {} to unmake move {}", mv.to, mv));
        self.grid[mv.from.row as usize][mv.from.col as usize] = Some((piece, color));
        self.toggle_piece(mv.from, piece, color, true);
        if let Some((captured_piece, captured_color)) = captured {
            self.grid[mv.to.row as usize][mv.to.col as usize] =
                Some((captured_piece, captured_color));
            self.toggle_piece(mv.to, captured_piece, captured_color, true);
        }
        debug_assert_eq!(self.key, key_before, "key mismatch after unmaking {}", mv);
    }

    /// Runs `f` with the pieces of `mv` moved on the grid only. Scores, hashes
    /// and history are left alone, so this is only for legality probes.
    pub(crate) fn with_move_applied<T>(&mut self, mv: Move, f: impl FnOnce(&Board) -> T) -> T {
        let (from_row, from_col) = (mv.from.row as usize, mv.from.col as usize);
        let (to_row, to_col) = (mv.to.row as usize, mv.to.col as usize);
        let moving = self.grid[from_row][from_col];
        let captured = self.grid[to_row][to_col];
        self.grid[to_row][to_col] = moving;
        self.grid[from_row][from_col] = None;
        let result = f(self);
        self.grid[from_row][from_col] = moving;
        self.grid[to_row][to_col] = captured;
        result
    }

    /// Passes the turn without moving a piece.
    pub fn make_null_move(&mut self) {
        let key_before = self.key;
        self.toggle_turn();
        self.history.push(Move::NULL, None, key_before, false);
        self.distance += 1;
    }

    pub fn unmake_null_move(&mut self) {
        let (mv, _, _) = self.history.pop();
        debug_assert!(mv.is_null(), "unmake_null_move called on a real move");
        self.distance -= 1;
        self.toggle_turn();
    }

    /// Score of being mated at the current distance. Closer mates score lower.
    pub fn mate_value(&self) -> i32 {
        self.distance - MATE_VALUE
    }

    /// Score of losing by perpetual check at the current distance.
    pub fn ban_value(&self) -> i32 {
        self.distance - BAN_VALUE
    }

    /// Slightly negative for the side that started the search.
    pub fn draw_value(&self) -> i32 {
        if self.distance & 1 == 0 {
            -DRAW_VALUE
        } else {
            DRAW_VALUE
        }
    }

    pub fn to_fen(&self) -> String {
        crate::input_handler::fen_serialize::to_fen(self)
    }
}

impl PartialEq for Board {
    /// Positions are equal when the grid and side to move match; history is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid && self.turn == other.turn
    }
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_fen(input)
    }
}
