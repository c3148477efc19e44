//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use xiangqi::game::engine::Engine;

use super::util::{create_config, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(create_config(self.search));

        if engine.valid_moves().is_empty() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.get_best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
