//! PvP command - play a game against another human.

use structopt::StructOpt;
use xiangqi::board::Board;
use xiangqi::game::engine::EngineConfig;
use xiangqi::game::mode::HumanVsHuman;
use xiangqi::input_handler::fen::STARTING_POSITION_FEN;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = EngineConfig {
            starting_position: self.starting_position,
            ..EngineConfig::default()
        };
        run_game_loop(HumanVsHuman, config);
    }
}
