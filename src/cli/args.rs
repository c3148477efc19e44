//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, pvp::PvpArgs, versus_external::VersusExternalArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "xiangqi",
    about = "A xiangqi (Chinese chess) engine implemented in Rust"
)]
pub enum Xiangqi {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches with iterative-deepening alpha-beta for `--time-ms` per move (default: 1000) up to `--depth` (default: 64). Your color is chosen at random unless you specify it with `--color`. The initial position can be given in FEN with `--fen` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The initial position can be given in FEN with `--fen` (default: starting position)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself with the given `--time-ms` and `--depth` limits. The initial position can be given in FEN with `--fen` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Print the engine's best move, in coordinate notation such as `h2e2`, for the position given with `--fen` (default: starting position)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of possible positions for a given `--depth` (default: 4), and report the time it took to do so. By default, this counts every legal leaf. The routine can instead report the nodes visited by alpha-beta search with `--strategy alpha-beta`."
    )]
    CountPositions(CountPositionsArgs),
    #[structopt(
        name = "versus-external",
        about = "Play the engine against an external UCCI or UCI engine given with `--engine`. The external engine's search is limited by `--go` (default: `time 1000`)."
    )]
    VersusExternal(VersusExternalArgs),
}

impl crate::cli::commands::Command for Xiangqi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
            VersusExternal(cmd),
        }
    }
}
