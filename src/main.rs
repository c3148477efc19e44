mod cli;

use cli::commands::Command;
use cli::Xiangqi;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Xiangqi::from_args().execute();
}
