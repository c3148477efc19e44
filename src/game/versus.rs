//! Plays two move selectors against each other, e.g. the built-in searcher
//! against an external engine.

use log::{info, warn};

use crate::board::color::Color;
use crate::chess_move::Move;
use crate::evaluate::GameEnding;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::r#loop::announce;
use crate::game::selector::MoveSelector;

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Ended(GameEnding),
    /// A selector failed to produce a legal move and loses the game.
    Forfeit { loser: Color, reason: String },
    MoveCapReached,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub moves: Vec<Move>,
}

pub fn play_match<'a>(
    config: EngineConfig,
    red: &'a mut dyn MoveSelector,
    black: &'a mut dyn MoveSelector,
    max_moves: usize,
    mut ui: Option<&mut GameDisplay>,
) -> MatchResult {
    let mut engine = Engine::with_config(config);

    let outcome = loop {
        if let Some(ending) = engine.check_game_over() {
            break MatchOutcome::Ended(ending);
        }
        if engine.move_history().len() >= max_moves {
            break MatchOutcome::MoveCapReached;
        }

        let turn = engine.board().turn();
        let selector = match turn {
            Color::Red => &mut *red,
            Color::Black => &mut *black,
        };

        let chosen = selector
            .think(engine.board())
            .map_err(|error| error.to_string())
            .and_then(|mv| engine.make_move(mv).map_err(|error| error.to_string()));
        if let Err(reason) = chosen {
            warn!("{} ({}) forfeits: {}", selector.name(), turn, reason);
            break MatchOutcome::Forfeit {
                loser: turn,
                reason,
            };
        }

        if let Some(ui) = ui.as_mut() {
            let stats = format!("{} (red) vs {} (black)", red.name(), black.name());
            ui.render_game_state(
                engine.board(),
                engine.board().turn(),
                engine.last_move(),
                Some(&stats),
            );
        }
    };

    info!("match finished: {:?}", outcome);
    MatchResult {
        outcome,
        moves: engine.move_history().to_vec(),
    }
}

pub fn describe(outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::Ended(ending) => announce(*ending),
        MatchOutcome::Forfeit { loser, reason } => {
            format!("{} forfeits ({}). {} wins.", loser, reason, loser.opposite())
        }
        MatchOutcome::MoveCapReached => "Move cap reached without a result.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::alpha_beta_searcher::{SearchConfig, SearchContext};
    use crate::board::Board;
    use crate::game::selector::SelectError;
    use crate::xiangqi_position;

    fn searcher(max_depth: u8) -> SearchContext {
        SearchContext::with_config(SearchConfig {
            search_time: Duration::from_secs(10),
            max_depth,
            hash_bits: 12,
            null_move_pruning: true,
        })
    }

    struct Resigner;

    impl MoveSelector for Resigner {
        fn name(&self) -> &str {
            "resigner"
        }

        fn think(&mut self, _board: &Board) -> Result<Move, SelectError> {
            Ok(Move::NULL)
        }
    }

    #[test]
    fn test_searchers_play_out_a_mate() {
        let starting_position = xiangqi_position! {
            ...k.....
            .........
            .........
            .........
            .........
            R........
            .........
            .........
            .........
            ....K....
        };
        let config = EngineConfig {
            starting_position,
            ..EngineConfig::default()
        };

        let result = play_match(config, &mut searcher(2), &mut searcher(2), 10, None);
        assert_eq!(
            result.outcome,
            MatchOutcome::Ended(GameEnding::Checkmate {
                loser: Color::Black
            })
        );
        assert_eq!(result.moves.len(), 1);
    }

    #[test]
    fn test_bad_move_forfeits() {
        let result = play_match(
            EngineConfig::default(),
            &mut searcher(1),
            &mut Resigner,
            10,
            None,
        );
        match &result.outcome {
            MatchOutcome::Forfeit { loser, .. } => assert_eq!(*loser, Color::Black),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(result.moves.len(), 1);
        assert!(describe(&result.outcome).ends_with("red wins."));
    }

    #[test]
    fn test_move_cap() {
        let result = play_match(
            EngineConfig::default(),
            &mut searcher(1),
            &mut searcher(1),
            4,
            None,
        );
        assert_eq!(result.outcome, MatchOutcome::MoveCapReached);
        assert_eq!(result.moves.len(), 4);
    }
}
