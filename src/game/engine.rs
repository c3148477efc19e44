use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{select_move, SearchConfig, SearchContext, SearchError, LIMIT_DEPTH};
use crate::alpha_beta_searcher::transposition_table::DEFAULT_HASH_BITS;
use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::{Move, MoveList};
use crate::evaluate::{self, GameEnding};
use crate::input_handler::MoveInput;
use crate::move_generator::{generate_moves, is_legal_move};

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search_time: Duration,
    pub max_depth: u8,
    pub hash_bits: u8,
    pub null_move_pruning: bool,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_time: Duration::from_millis(1000),
            max_depth: LIMIT_DEPTH as u8,
            hash_bits: DEFAULT_HASH_BITS,
            null_move_pruning: true,
            starting_position: Board::starting_position(),
        }
    }
}

impl EngineConfig {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            search_time: self.search_time,
            max_depth: self.max_depth.min(LIMIT_DEPTH as u8),
            hash_bits: self.hash_bits,
            null_move_pruning: self.null_move_pruning,
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },
    #[error("search error: {error}")]
    SearchError { error: SearchError },
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        EngineError::SearchError { error }
    }
}

/// Owns the live game: the board with its full game history, and the
/// searcher that picks moves for it.
pub struct Engine {
    board: Board,
    move_history: Vec<Move>,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut board = config.starting_position.clone();
        board.set_irreversible();
        board.reset_distance();
        Self {
            board,
            move_history: Vec::new(),
            search_context: SearchContext::with_config(config.search_config()),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn valid_moves(&mut self) -> MoveList {
        let turn = self.board.turn();
        generate_moves(&mut self.board, turn, true)
    }

    pub fn check_game_over(&mut self) -> Option<GameEnding> {
        let ending = evaluate::game_ending(&mut self.board);
        if let Some(ending) = ending {
            info!("game over after {} moves: {:?}", self.move_history.len(), ending);
        }
        ending
    }

    /// Commits `mv` to the game. A capture makes every earlier position
    /// unreachable, so the repetition history starts over.
    pub fn make_move(&mut self, mv: Move) -> Result<Move, EngineError> {
        if !is_legal_move(&mut self.board, mv) {
            return Err(EngineError::IllegalMove { mv });
        }

        let mover = self.board.turn();
        let captured = self.board.make_move(mv);
        if captured.is_some() {
            self.board.set_irreversible();
        }
        self.board.reset_distance();
        self.move_history.push(mv);

        info!("{} played {}", mover, mv);
        Ok(mv)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<Move, EngineError> {
        match input {
            MoveInput::Coordinate { mv } => self.make_move(mv),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_best_move(&mut self) -> Result<Move, EngineError> {
        Ok(select_move(&mut self.search_context, &mut self.board)?)
    }

    pub fn make_best_move(&mut self) -> Result<Move, EngineError> {
        let best_move = self.get_best_move()?;
        self.make_move(best_move)
    }

    /// Static score for `color`.
    pub fn get_score(&self, color: Color) -> i32 {
        self.board.score(color) - self.board.score(color.opposite())
    }

    pub fn get_search_stats(&self) -> SearchStats {
        let context = &self.search_context;
        SearchStats {
            positions_searched: context.searched_position_count(),
            quiescence_nodes: context.quiescence_nodes(),
            depth: context.completed_depth(),
            last_score: context.last_score(),
            last_search_duration: context.last_search_duration(),
            tt_hits: context.tt_hits(),
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub quiescence_nodes: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
    pub tt_hits: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::WIN_VALUE;
    use crate::xiangqi_position;

    fn mv(text: &str) -> Move {
        Move::from_text(text).unwrap()
    }

    fn quick_config(starting_position: Board) -> EngineConfig {
        EngineConfig {
            search_time: Duration::from_secs(10),
            max_depth: 3,
            hash_bits: 14,
            null_move_pruning: true,
            starting_position,
        }
    }

    #[test]
    fn test_find_mate_in_1_red() {
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
        let mut engine = Engine::with_config(quick_config(starting_position));

        let best = engine.make_best_move().unwrap();
        assert!(
            best == mv("a4d4") || best == mv("a4a8"),
            "{} does not lead to checkmate",
            best
        );
        assert!(engine.get_search_stats().last_score.unwrap() > WIN_VALUE);
        assert_eq!(
            engine.check_game_over(),
            Some(GameEnding::Checkmate {
                loser: Color::Black
            })
        );
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut engine = Engine::new();
        // horses cannot move straight ahead
        let result = engine.make_move(mv("b0b2"));
        assert!(matches!(result, Err(EngineError::IllegalMove { .. })));
        assert_eq!(engine.board(), &Board::starting_position());
        assert_eq!(engine.last_move(), None);
    }

    #[test]
    fn test_capture_resets_repetition_history() {
        let mut engine = Engine::new();
        engine.make_move(mv("h2e2")).unwrap();
        engine.make_move(mv("h9g7")).unwrap();
        assert_eq!(engine.board().reversible_plies(), 2);

        // cannon takes the pawn in the centre
        engine.make_move(mv("e2e6")).unwrap();
        assert_eq!(engine.board().reversible_plies(), 0);
        assert_eq!(engine.board().distance(), 0);
        assert_eq!(engine.move_history().len(), 3);
    }

    #[test]
    fn test_coordinate_input() {
        let mut engine = Engine::new();
        let played = engine
            .make_move_from_input(MoveInput::Coordinate { mv: mv("b0c2") })
            .unwrap();
        assert_eq!(played, mv("b0c2"));
        assert_eq!(engine.board().turn(), Color::Black);
        assert_eq!(engine.last_move(), Some(mv("b0c2")));
    }

    #[test]
    fn test_engine_input_plays_a_legal_move() {
        let mut engine = Engine::with_config(quick_config(Board::starting_position()));
        let played = engine.make_move_from_input(MoveInput::UseEngine).unwrap();
        assert_eq!(engine.last_move(), Some(played));
        assert_eq!(engine.board().turn(), Color::Black);
        assert!(engine.get_search_stats().positions_searched > 0);
    }

    #[test]
    fn test_repetition_ends_game() {
        let mut engine = Engine::new();
        for _ in 0..2 {
            for text in ["b0c2", "b9c7", "c2b0", "c7b9"].iter() {
                engine.make_move(mv(text)).unwrap();
                assert_eq!(engine.check_game_over(), None);
            }
        }
        for text in ["b0c2", "b9c7", "c2b0"].iter() {
            engine.make_move(mv(text)).unwrap();
        }
        engine.make_move(mv("c7b9")).unwrap();
        assert_eq!(engine.check_game_over(), Some(GameEnding::DrawByRepetition));
    }

    #[test]
    fn test_search_depth_capped() {
        let config = EngineConfig {
            max_depth: 200,
            ..EngineConfig::default()
        };
        assert_eq!(config.search_config().max_depth, LIMIT_DEPTH as u8);
    }
}
