pub mod chess_move;
pub mod notation;

pub use chess_move::{Move, MoveList};
pub use notation::MoveParseError;
