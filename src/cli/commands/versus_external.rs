//! Versus external command - play the built-in engine against a UCCI/UCI engine.

use structopt::StructOpt;
use xiangqi::alpha_beta_searcher::SearchContext;
use xiangqi::board::color::Color;
use xiangqi::game::display::GameDisplay;
use xiangqi::game::external_engine::{ExternalEngine, Protocol};
use xiangqi::game::versus::{describe, play_match};

use super::util::{create_config, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct VersusExternalArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(long = "engine", help = "Path to the external engine executable")]
    pub engine: String,
    #[structopt(long = "arg", help = "Argument passed to the external engine; repeatable")]
    pub engine_args: Vec<String>,
    #[structopt(long = "protocol", default_value = "ucci")]
    pub protocol: Protocol,
    #[structopt(
        long = "go",
        default_value = "time 1000",
        help = "Limits appended to every `go` command sent to the external engine"
    )]
    pub go_limits: String,
    #[structopt(
        short = "c",
        long = "color",
        default_value = "random",
        help = "Side played by the built-in engine"
    )]
    pub color: Color,
    #[structopt(long = "max-moves", default_value = "400")]
    pub max_moves: usize,
}

impl Command for VersusExternalArgs {
    fn execute(self) {
        let mut external =
            match ExternalEngine::spawn(&self.engine, &self.engine_args, self.protocol, &self.go_limits) {
                Ok(engine) => engine,
                Err(error) => {
                    eprintln!("Failed to start {}: {}", self.engine, error);
                    std::process::exit(1);
                }
            };

        let config = create_config(self.search);
        let mut searcher = SearchContext::with_config(config.search_config());
        let mut ui = GameDisplay::new();

        let result = match self.color {
            Color::Red => play_match(config, &mut searcher, &mut external, self.max_moves, Some(&mut ui)),
            Color::Black => play_match(config, &mut external, &mut searcher, self.max_moves, Some(&mut ui)),
        };

        println!("{}", describe(&result.outcome));
        let moves: Vec<String> = result.moves.iter().map(|mv| mv.to_string()).collect();
        println!("moves: {}", moves.join(" "));
    }
}
