use crate::board::color::Color;
use crate::board::Board;
use crate::move_generator;

pub mod evaluation_tables;

/// Score of delivering mate at the root. Every ply of distance shaves one point off.
pub const MATE_VALUE: i32 = 10_000;
/// Losing by perpetual check scores just above being mated.
pub const BAN_VALUE: i32 = MATE_VALUE - 100;
/// Scores beyond this are treated as decided.
pub const WIN_VALUE: i32 = MATE_VALUE - 200;
pub const DRAW_VALUE: i32 = 20;
/// Tempo bonus for the side to move.
pub const ADVANCED_VALUE: i32 = 3;

/// Plies without a capture after which the game is drawn.
pub const MOVE_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEnding {
    /// The side to move has no legal move. In xiangqi this loses whether or not it is in check.
    Checkmate { loser: Color },
    /// A position repeated while one side checked on every move; that side loses.
    PerpetualCheck { loser: Color },
    DrawByRepetition,
    DrawByMoveLimit,
}

/// Static score from the side to move's point of view.
#[inline(always)]
pub fn evaluate(board: &Board) -> i32 {
    let own = board.turn();
    board.score(own) - board.score(own.opposite()) + ADVANCED_VALUE
}

/// Returns the game ending state if the game has ended, otherwise returns None.
pub fn game_ending(board: &mut Board) -> Option<GameEnding> {
    let turn = board.turn();
    if move_generator::generate_moves(board, turn, true).is_empty() {
        return Some(GameEnding::Checkmate { loser: turn });
    }

    let repetition = board.repetition_status(3);
    if repetition.is_repeated() {
        let self_perpetual = repetition.self_perpetual_check();
        let opponent_perpetual = repetition.opponent_perpetual_check();
        return Some(match (self_perpetual, opponent_perpetual) {
            (true, false) => GameEnding::PerpetualCheck { loser: turn },
            (false, true) => GameEnding::PerpetualCheck {
                loser: turn.opposite(),
            },
            _ => GameEnding::DrawByRepetition,
        });
    }

    if board.reversible_plies() >= MOVE_LIMIT {
        return Some(GameEnding::DrawByMoveLimit);
    }

    None
}
