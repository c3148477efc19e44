//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use xiangqi::game::mode::ComputerVsComputer;

use super::util::{create_config, run_game_loop, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.search);
        run_game_loop(
            ComputerVsComputer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
