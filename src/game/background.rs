//! Runs the engine's move search on a worker thread.
//!
//! The engine, and with it the live board, is moved into the thread for the
//! whole search. The foreground keeps only a snapshot clone to draw from and
//! watches a single atomic status flag; nothing else is shared.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;

use crate::board::Board;
use crate::chess_move::Move;

use super::engine::{Engine, EngineError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum AiStatus {
    /// No engine side in this game.
    Off = 0,
    /// Engine enabled and idle.
    On = 1,
    /// A result is waiting to be applied by the foreground.
    Play = 2,
    /// The engine owns the board and is searching.
    Think = 3,
}

impl From<u8> for AiStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => AiStatus::Off,
            1 => AiStatus::On,
            2 => AiStatus::Play,
            3 => AiStatus::Think,
            _ => panic!("invalid engine status value: {}", value),
        }
    }
}

/// The flag shared between the control loop and the search thread.
#[derive(Debug)]
pub struct AiStatusFlag(AtomicU8);

impl AiStatusFlag {
    pub fn new(status: AiStatus) -> Self {
        Self(AtomicU8::new(status as u8))
    }

    pub fn get(&self) -> AiStatus {
        AiStatus::from(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, status: AiStatus) {
        self.0.store(status as u8, Ordering::Release);
    }

    /// Moves from `from` to `to` atomically. Returns false, leaving the flag
    /// untouched, if it did not read `from`.
    pub fn transition(&self, from: AiStatus, to: AiStatus) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for AiStatusFlag {
    fn default() -> Self {
        Self::new(AiStatus::Off)
    }
}

pub struct BackgroundSearch {
    snapshot: Board,
    status: Arc<AiStatusFlag>,
    handle: JoinHandle<(Engine, Result<Move, EngineError>)>,
}

impl BackgroundSearch {
    /// Takes ownership of `engine` and starts searching its position. The flag
    /// must read `On`; it reads `Think` until the result is ready, then `Play`.
    pub fn spawn(engine: Engine, status: Arc<AiStatusFlag>) -> Self {
        let snapshot = engine.board().clone();
        let started = status.transition(AiStatus::On, AiStatus::Think);
        assert!(started, "background search started while the engine was {:?}", status.get());

        let worker_status = Arc::clone(&status);
        let handle = thread::spawn(move || {
            let mut engine = engine;
            let result = engine.get_best_move();
            debug!("background search finished: {:?}", result);
            worker_status.set(AiStatus::Play);
            (engine, result)
        });

        Self {
            snapshot,
            status,
            handle,
        }
    }

    /// The position as it was when the search started.
    pub fn snapshot(&self) -> &Board {
        &self.snapshot
    }

    pub fn is_ready(&self) -> bool {
        self.status.get() == AiStatus::Play
    }

    /// Waits for the search and hands the engine back. The flag still reads
    /// `Play`; the caller applies the move and returns it to `On`.
    pub fn finish(self) -> (Engine, Result<Move, EngineError>) {
        match self.handle.join() {
            Ok(outcome) => outcome,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game::engine::EngineConfig;
    use crate::move_generator::generate_moves;

    #[test]
    fn test_status_transitions() {
        let flag = AiStatusFlag::new(AiStatus::On);
        assert!(flag.transition(AiStatus::On, AiStatus::Think));
        assert!(!flag.transition(AiStatus::On, AiStatus::Think));
        assert_eq!(flag.get(), AiStatus::Think);
        flag.set(AiStatus::Play);
        assert!(flag.transition(AiStatus::Play, AiStatus::On));
        assert_eq!(flag.get(), AiStatus::On);
    }

    #[test]
    fn test_status_round_trips_through_u8() {
        for status in [AiStatus::Off, AiStatus::On, AiStatus::Play, AiStatus::Think].iter() {
            assert_eq!(AiStatus::from(*status as u8), *status);
        }
    }

    #[test]
    fn test_background_search_returns_engine_and_move() {
        let engine = Engine::with_config(EngineConfig {
            max_depth: 2,
            search_time: Duration::from_secs(10),
            hash_bits: 12,
            ..EngineConfig::default()
        });
        let status = Arc::new(AiStatusFlag::new(AiStatus::On));

        let search = BackgroundSearch::spawn(engine, Arc::clone(&status));
        assert_eq!(search.snapshot(), &Board::starting_position());

        let (mut engine, result) = search.finish();
        assert_eq!(status.get(), AiStatus::Play);
        let best = result.unwrap();

        // the live board comes back untouched by the search
        assert_eq!(engine.board(), &Board::starting_position());
        let turn = engine.board().turn();
        assert!(generate_moves(engine.board_mut(), turn, true).contains(&best));
    }

    #[test]
    #[should_panic]
    fn test_spawn_requires_idle_engine() {
        let status = Arc::new(AiStatusFlag::new(AiStatus::Off));
        BackgroundSearch::spawn(Engine::new(), status);
    }
}
