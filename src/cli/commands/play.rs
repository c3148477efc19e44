//! Play command - play a game against the computer.

use structopt::StructOpt;
use xiangqi::board::color::Color;
use xiangqi::game::mode::HumanVsComputer;

use super::util::{create_config, run_game_loop, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.search);
        run_game_loop(
            HumanVsComputer {
                human_color: self.color,
            },
            config,
        );
    }
}
