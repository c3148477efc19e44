use std::time::Duration;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::Move;
use crate::game::background::AiStatus;
use crate::game::display::GameDisplay;
use crate::game::engine::SearchStats;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

/// What a mode draws from. During a background search `board` is the
/// snapshot taken before the engine took the live board.
pub struct GameView<'a> {
    pub board: &'a Board,
    pub current_turn: Color,
    pub last_move: Option<Move>,
    pub stats: Option<SearchStats>,
    pub status: AiStatus,
}

pub trait GameMode {
    fn get_move(&self, current_turn: Color) -> Result<Option<MoveInput>, InputError>;
    fn render(&self, ui: &mut GameDisplay, view: &GameView<'_>);
    fn frame_delay(&self) -> Option<Duration>;
    fn uses_engine(&self) -> bool {
        true
    }
}

pub struct HumanVsComputer {
    pub human_color: Color,
}

pub struct ComputerVsComputer {
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between moves makes the game easier to observe.
    pub delay_between_moves: Option<Duration>,
}

pub struct HumanVsHuman;

fn read_human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(_) => Ok(None),
    }
}

pub fn format_stats(stats: &SearchStats, status: AiStatus) -> String {
    if status == AiStatus::Think {
        return "* Thinking...".to_string();
    }
    format!(
        "* Score: {}\n* Positions searched: {} ({} quiescence, depth {})\n* Hash hits: {}\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.quiescence_nodes,
        stats.depth,
        stats.tt_hits,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

impl GameMode for HumanVsComputer {
    fn get_move(&self, current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_color {
            read_human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }

    fn render(&self, ui: &mut GameDisplay, view: &GameView<'_>) {
        let stats_display = view
            .stats
            .as_ref()
            .map(|stats| format_stats(stats, view.status));
        ui.render_game_state(
            view.board,
            view.current_turn,
            view.last_move,
            stats_display.as_deref(),
        );
        if view.current_turn == self.human_color {
            println!("Enter your move (e.g. h2e2, or `go` for a hint move):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

impl GameMode for ComputerVsComputer {
    fn get_move(&self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }

    fn render(&self, ui: &mut GameDisplay, view: &GameView<'_>) {
        let stats_display = view
            .stats
            .as_ref()
            .map(|stats| format_stats(stats, view.status));
        ui.render_game_state(
            view.board,
            view.current_turn,
            view.last_move,
            stats_display.as_deref(),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

impl GameMode for HumanVsHuman {
    fn get_move(&self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        read_human_move()
    }

    fn render(&self, ui: &mut GameDisplay, view: &GameView<'_>) {
        ui.render_game_state(view.board, view.current_turn, view.last_move, None);
        println!("Enter your move:");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }

    fn uses_engine(&self) -> bool {
        false
    }
}
