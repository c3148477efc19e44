use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::info;

use crate::evaluate::GameEnding;
use crate::game::background::{AiStatus, AiStatusFlag, BackgroundSearch};
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::input_handler::{InputError, MoveInput};

use super::mode::{GameMode, GameView};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub struct GameLoop<T: GameMode> {
    engine: Engine,
    ui: GameDisplay,
    mode: T,
    status: Arc<AiStatusFlag>,
}

impl<T: GameMode> GameLoop<T> {
    pub fn new(mode: T, config: EngineConfig) -> Self {
        let status = if mode.uses_engine() {
            AiStatus::On
        } else {
            AiStatus::Off
        };
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            mode,
            status: Arc::new(AiStatusFlag::new(status)),
        }
    }

    pub fn run(self) {
        let GameLoop {
            mut engine,
            mut ui,
            mode,
            status,
        } = self;

        loop {
            if let Some(ending) = engine.check_game_over() {
                let view = view_of(&engine, status.get());
                mode.render(&mut ui, &view);
                println!("{}", announce(ending));
                break;
            }

            mode.render(&mut ui, &view_of(&engine, status.get()));

            let current_turn = engine.board().turn();
            let input = match mode.get_move(current_turn) {
                Ok(Some(input)) => input,
                Ok(None) => {
                    println!("Invalid input");
                    continue;
                }
                Err(InputError::UserExit) => break,
                Err(error) => {
                    println!("error: {}", error);
                    continue;
                }
            };

            let result = match input {
                MoveInput::UseEngine if status.get() == AiStatus::Off => {
                    println!("The engine is disabled in this mode");
                    continue;
                }
                MoveInput::UseEngine => {
                    let stats = engine.get_search_stats();
                    let last_move = engine.last_move();
                    let search = BackgroundSearch::spawn(engine, Arc::clone(&status));

                    // the live board belongs to the search thread until it finishes
                    let view = GameView {
                        board: search.snapshot(),
                        current_turn,
                        last_move,
                        stats: Some(stats),
                        status: status.get(),
                    };
                    mode.render(&mut ui, &view);
                    while !search.is_ready() {
                        thread::sleep(POLL_INTERVAL);
                    }

                    let (returned, result) = search.finish();
                    engine = returned;
                    let applied = result.and_then(|mv| engine.make_move(mv));
                    status.transition(AiStatus::Play, AiStatus::On);
                    applied
                }
                input => engine.make_move_from_input(input),
            };

            match result {
                Ok(_) => {
                    if let Some(delay) = mode.frame_delay() {
                        thread::sleep(delay);
                    }
                }
                Err(error) => println!("error: {}", error),
            }
        }

        info!("game loop finished after {} moves", engine.move_history().len());
    }
}

fn view_of(engine: &Engine, status: AiStatus) -> GameView<'_> {
    GameView {
        board: engine.board(),
        current_turn: engine.board().turn(),
        last_move: engine.last_move(),
        stats: Some(engine.get_search_stats()),
        status,
    }
}

pub fn announce(ending: GameEnding) -> String {
    match ending {
        GameEnding::Checkmate { loser } => {
            format!("Checkmate! {} wins.", loser.opposite())
        }
        GameEnding::PerpetualCheck { loser } => format!(
            "Perpetual check by {}. {} wins.",
            loser,
            loser.opposite()
        ),
        GameEnding::DrawByRepetition => "Draw by repetition.".to_string(),
        GameEnding::DrawByMoveLimit => "Draw: no capture in 100 moves.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;

    #[test]
    fn test_announce() {
        assert_eq!(
            announce(GameEnding::Checkmate {
                loser: Color::Black
            }),
            "Checkmate! red wins."
        );
        assert_eq!(
            announce(GameEnding::PerpetualCheck { loser: Color::Red }),
            "Perpetual check by red. black wins."
        );
        assert_eq!(announce(GameEnding::DrawByRepetition), "Draw by repetition.");
    }
}
