//! Shared utilities for CLI commands.

use std::time::Duration;

use structopt::StructOpt;
use xiangqi::board::Board;
use xiangqi::game::engine::EngineConfig;
use xiangqi::game::mode::GameMode;
use xiangqi::game::r#loop::GameLoop;
use xiangqi::input_handler::fen::STARTING_POSITION_FEN;

/// Search limits shared by every command that runs the engine.
#[derive(StructOpt)]
pub struct SearchArgs {
    #[structopt(
        short,
        long = "time-ms",
        default_value = "1000",
        help = "Time budget per move in milliseconds; checked between search depths"
    )]
    pub time_ms: u64,
    #[structopt(short, long, default_value = "64", help = "Maximum search depth")]
    pub depth: u8,
    #[structopt(long = "hash-bits", default_value = "20")]
    pub hash_bits: u8,
    #[structopt(long = "no-null-move", help = "Disable null-move pruning")]
    pub no_null_move: bool,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
}

pub(crate) fn create_config(search: SearchArgs) -> EngineConfig {
    EngineConfig {
        search_time: Duration::from_millis(search.time_ms),
        max_depth: search.depth,
        hash_bits: search.hash_bits,
        null_move_pruning: !search.no_null_move,
        starting_position: search.starting_position,
    }
}

pub(crate) fn run_game_loop<M: GameMode>(mode: M, config: EngineConfig) {
    let game = GameLoop::new(mode, config);
    game.run();
}
