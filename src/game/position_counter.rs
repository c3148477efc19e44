use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::alpha_beta_searcher::{select_move, SearchConfig, SearchContext};
use crate::board::Board;
use crate::move_generator::count_positions;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepthCount {
    pub depth: u8,
    pub positions: usize,
    pub duration: Duration,
}

/// Counts positions at every depth from 1 to `depth`, either every legal leaf
/// or the nodes an alpha-beta search of that depth visits.
pub fn count_positions_by_depth(
    starting_position: &Board,
    depth: u8,
    strategy: CountPositionsStrategy,
) -> Vec<DepthCount> {
    (1..=depth)
        .map(|depth| {
            let mut board = starting_position.clone();
            let started = Instant::now();
            let positions = match strategy {
                CountPositionsStrategy::All => count_positions(&mut board, depth),
                CountPositionsStrategy::AlphaBeta => {
                    let mut context = SearchContext::with_config(SearchConfig {
                        search_time: Duration::from_secs(3600),
                        max_depth: depth,
                        ..SearchConfig::default()
                    });
                    // a position without moves simply counts nothing
                    let _ = select_move(&mut context, &mut board);
                    context.searched_position_count()
                }
            };
            DepthCount {
                depth,
                positions,
                duration: started.elapsed(),
            }
        })
        .collect()
}

pub fn run_count_positions(starting_position: &Board, depth: u8, strategy: CountPositionsStrategy) {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for count in count_positions_by_depth(starting_position, depth, strategy) {
        let positions_per_second = count.positions as f64 / count.duration.as_secs_f64();
        total_positions += count.positions;
        total_duration += count.duration;

        println!(
            "depth: {}, positions: {}, positions per second: {:.0}",
            count.depth, count.positions, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {:.0}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}
