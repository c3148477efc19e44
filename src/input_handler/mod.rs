pub mod fen;
pub mod fen_serialize;
mod input;

pub use fen::{parse_fen, FenParseError, STARTING_POSITION_FEN};
pub use fen_serialize::to_fen;
pub use input::{parse_move_input, InputError, MoveInput};
