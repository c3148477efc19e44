//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{select_move, select_move_text, SearchConfig, SearchContext};
pub use crate::board::{Board, Color, Piece, Square};
pub use crate::chess_move::{Move, MoveList};
pub use crate::evaluate::GameEnding;
pub use crate::move_generator::generate_moves;
