use thiserror::Error;

use crate::alpha_beta_searcher::{select_move, SearchContext, SearchError};
use crate::board::Board;
use crate::chess_move::Move;

use super::external_engine::{ExternalEngine, ExternalEngineError};

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("search error: {error}")]
    Search { error: SearchError },
    #[error("external engine error: {error}")]
    External { error: ExternalEngineError },
}

impl From<SearchError> for SelectError {
    fn from(error: SearchError) -> Self {
        SelectError::Search { error }
    }
}

impl From<ExternalEngineError> for SelectError {
    fn from(error: ExternalEngineError) -> Self {
        SelectError::External { error }
    }
}

/// Anything that can pick a move for the side to move in a position.
pub trait MoveSelector {
    fn name(&self) -> &str;
    fn think(&mut self, board: &Board) -> Result<Move, SelectError>;
}

impl MoveSelector for SearchContext {
    fn name(&self) -> &str {
        "xiangqi"
    }

    /// Searches a private copy, so the caller's board and history stay as they were.
    fn think(&mut self, board: &Board) -> Result<Move, SelectError> {
        let mut position = board.clone();
        Ok(select_move(self, &mut position)?)
    }
}

impl MoveSelector for ExternalEngine {
    fn name(&self) -> &str {
        self.engine_name()
    }

    fn think(&mut self, board: &Board) -> Result<Move, SelectError> {
        Ok(self.best_move(board)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::alpha_beta_searcher::SearchConfig;
    use crate::xiangqi_position;

    #[test]
    fn test_searcher_selects_without_touching_board() {
        let board = Board::starting_position();
        let mut searcher = SearchContext::with_config(SearchConfig {
            search_time: Duration::from_secs(10),
            max_depth: 2,
            hash_bits: 12,
            null_move_pruning: true,
        });

        let best = searcher.think(&board).unwrap();
        assert!(!best.is_null());
        assert!(board.history_moves().is_empty());
        assert_eq!(searcher.name(), "xiangqi");
    }

    #[test]
    fn test_searcher_reports_mated_position() {
        let mut board = xiangqi_position! {
            ...k....R
            .........
            .........
            .........
            .........
            .........
            .........
            .........
            .........
            ...K.....
        };
        board.set_turn(crate::board::color::Color::Black);

        let mut searcher = SearchContext::with_config(SearchConfig {
            hash_bits: 12,
            ..SearchConfig::default()
        });
        assert!(matches!(
            searcher.think(&board),
            Err(SelectError::Search {
                error: SearchError::NoAvailableMoves
            })
        ));
    }
}
