//! Alpha-beta search driver: iterative deepening, negamax with null-move
//! pruning and check extension, and quiescence search.

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::board::Board;
use crate::chess_move::Move;
use crate::evaluate::{evaluate, MATE_VALUE, WIN_VALUE};
use crate::move_generator::generate_moves;

use super::history_table::HistoryTable;
use super::killer_moves::KillerMoves;
use super::move_orderer::{moves_by_history, ordered_captures, MoveSort};
use super::transposition_table::{BoundType, TranspositionTable, DEFAULT_HASH_BITS};
use super::{LIMIT_DEPTH, NULL_DEPTH_REDUCTION, NULL_OKAY_MARGIN, NULL_SAFE_MARGIN};

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Search configuration parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Checked after each completed depth; a pass in progress is never interrupted.
    pub search_time: Duration,
    pub max_depth: u8,
    /// The transposition table holds `2^hash_bits` entries.
    pub hash_bits: u8,
    pub null_move_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_time: Duration::from_millis(1000),
            max_depth: LIMIT_DEPTH as u8,
            hash_bits: DEFAULT_HASH_BITS,
            null_move_pruning: true,
        }
    }
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    quiescence_nodes: usize,
    null_move_attempts: usize,
    null_move_cutoffs: usize,
    completed_depth: u8,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything one search owns: configuration, statistics and the ordering
/// and hash tables. Tables are reset at the start of every `select_move`.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
    pub(super) transposition_table: TranspositionTable,
    killer_moves: KillerMoves,
    history_table: HistoryTable,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl SearchContext {
    pub fn new(search_time: Duration, max_depth: u8) -> Self {
        Self::with_config(SearchConfig {
            search_time,
            max_depth,
            ..SearchConfig::default()
        })
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            transposition_table: TranspositionTable::new(config.hash_bits),
            config,
            stats: SearchStats::default(),
            killer_moves: KillerMoves::new(),
            history_table: HistoryTable::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.transposition_table.clear();
        self.killer_moves.clear();
        self.history_table.clear();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn quiescence_nodes(&self) -> usize {
        self.stats.quiescence_nodes
    }

    pub fn search_depth(&self) -> u8 {
        self.config.max_depth.clamp(1, LIMIT_DEPTH as u8)
    }

    /// Deepest iteration finished by the last search.
    pub fn completed_depth(&self) -> u8 {
        self.stats.completed_depth
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn null_move_attempts(&self) -> usize {
        self.stats.null_move_attempts
    }

    pub fn null_move_cutoffs(&self) -> usize {
        self.stats.null_move_cutoffs
    }

    pub fn tt_hits(&self) -> usize {
        self.transposition_table.hits()
    }

    pub fn tt_depth_rejected(&self) -> usize {
        self.transposition_table.depth_rejected()
    }

    pub fn tt_bound_rejected(&self) -> usize {
        self.transposition_table.bound_rejected()
    }

    pub fn tt_overwrites(&self) -> usize {
        self.transposition_table.overwrites()
    }

    pub fn tt_size(&self) -> usize {
        self.transposition_table.size()
    }

    /// Searches every root move at `depth` with the full window and returns
    /// the best score and move. The result is stored as an exact hash entry.
    fn search_root(&mut self, board: &mut Board, depth: i32, hash_move: Move) -> (i32, Move) {
        let beta = MATE_VALUE;
        let mut alpha = -MATE_VALUE;
        let mut best_value = -MATE_VALUE;
        let mut best_move = Move::NULL;

        let killers = self.killer_moves.get(board.distance());
        let mut sort = MoveSort::new(board, hash_move, killers, &self.history_table);
        while let Some(mv) = sort.next(board, &self.history_table) {
            board.make_move(mv);
            let new_depth = if board.in_check() { depth } else { depth - 1 };
            let value = -self.search(board, -beta, -alpha, new_depth, true);
            board.unmake_move();

            if value > best_value {
                best_value = value;
                best_move = mv;
                if value > alpha {
                    alpha = value;
                }
            }
        }

        debug_assert!(!best_move.is_null(), "root search with no legal moves");
        self.transposition_table
            .record(board, BoundType::Exact, best_value, depth, best_move);
        self.record_best_move(board, best_move, depth);
        (best_value, best_move)
    }

    /// Negamax alpha-beta below the root. Returns a fail-soft score from the
    /// side to move's point of view.
    pub(super) fn search(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        beta: i32,
        depth: i32,
        no_null: bool,
    ) -> i32 {
        if depth <= 0 {
            return self.quiesce(board, alpha, beta);
        }
        self.stats.position_count += 1;

        // even being mated right here fails high
        let mate_value = board.mate_value();
        if mate_value >= beta {
            return mate_value;
        }

        let repetition = board.repetition_status(1);
        if repetition.is_repeated() {
            return board.repetition_value(repetition);
        }

        let (hash_score, hash_move) = self.transposition_table.probe(board, alpha, beta, depth);
        if let Some(score) = hash_score {
            return score;
        }

        if board.distance() == LIMIT_DEPTH {
            return evaluate(board);
        }

        if self.config.null_move_pruning
            && !no_null
            && !board.in_check()
            && board.score(board.turn()) > NULL_OKAY_MARGIN
        {
            self.stats.null_move_attempts += 1;
            board.make_null_move();
            let value = -self.search(
                board,
                -beta,
                1 - beta,
                depth - NULL_DEPTH_REDUCTION - 1,
                true,
            );
            board.unmake_null_move();

            if value >= beta
                && (board.score(board.turn()) > NULL_SAFE_MARGIN
                    || self.search(board, alpha, beta, depth - NULL_DEPTH_REDUCTION, true) >= beta)
            {
                self.stats.null_move_cutoffs += 1;
                return value;
            }
        }

        let mut bound_type = BoundType::Upper;
        let mut best_value = -MATE_VALUE;
        let mut best_move = Move::NULL;

        let killers = self.killer_moves.get(board.distance());
        let mut sort = MoveSort::new(board, hash_move, killers, &self.history_table);
        while let Some(mv) = sort.next(board, &self.history_table) {
            board.make_move(mv);
            let new_depth = if board.in_check() { depth } else { depth - 1 };
            let value = -self.search(board, -beta, -alpha, new_depth, false);
            board.unmake_move();

            if value > best_value {
                best_value = value;
                if value >= beta {
                    bound_type = BoundType::Lower;
                    best_move = mv;
                    break;
                }
                if value > alpha {
                    alpha = value;
                    bound_type = BoundType::Exact;
                    best_move = mv;
                }
            }
        }

        if best_value == -MATE_VALUE {
            return board.mate_value();
        }

        self.transposition_table
            .record(board, bound_type, best_value, depth, best_move);
        if !best_move.is_null() {
            self.record_best_move(board, best_move, depth);
        }
        best_value
    }

    /// Captures-only search past the horizon, standing pat on the static
    /// evaluation unless in check.
    pub(super) fn quiesce(&mut self, board: &mut Board, mut alpha: i32, beta: i32) -> i32 {
        self.stats.position_count += 1;
        self.stats.quiescence_nodes += 1;

        let mate_value = board.mate_value();
        if mate_value >= beta {
            return mate_value;
        }

        let repetition = board.repetition_status(1);
        if repetition.is_repeated() {
            return board.repetition_value(repetition);
        }

        if board.distance() == LIMIT_DEPTH {
            return evaluate(board);
        }

        let mut best_value = -MATE_VALUE;
        let moves = if board.in_check() {
            moves_by_history(board, &self.history_table)
        } else {
            let stand_pat = evaluate(board);
            if stand_pat >= beta {
                return stand_pat;
            }
            best_value = stand_pat;
            alpha = alpha.max(stand_pat);
            ordered_captures(board)
        };

        for mv in moves {
            board.make_move(mv);
            let value = -self.quiesce(board, -beta, -alpha);
            board.unmake_move();

            if value > best_value {
                if value >= beta {
                    return value;
                }
                best_value = value;
                alpha = alpha.max(value);
            }
        }

        if best_value == -MATE_VALUE {
            board.mate_value()
        } else {
            best_value
        }
    }

    /// Whether every root move other than `best_move` fails low against `beta`.
    fn is_unique_best(&mut self, board: &mut Board, best_move: Move, beta: i32, depth: i32) -> bool {
        let turn = board.turn();
        for mv in generate_moves(board, turn, true) {
            if mv == best_move {
                continue;
            }
            board.make_move(mv);
            let new_depth = if board.in_check() { depth } else { depth - 1 };
            let value = -self.search(board, -beta, 1 - beta, new_depth, false);
            board.unmake_move();
            if value >= beta {
                return false;
            }
        }
        true
    }

    fn record_best_move(&mut self, board: &Board, mv: Move, depth: i32) {
        self.history_table.record_best(mv, depth);
        self.killer_moves.store(board.distance(), mv);
    }
}

/// Picks a move for the side to move using iterative deepening.
///
/// Each pass runs to completion. Deepening stops once the time budget is
/// spent, the score shows a decided game, or only one move avoids a decisive
/// loss. The board is returned to its original state.
///
/// # Returns
///
/// - `Ok(best_move)` - The best move from the last completed pass
/// - `Err(SearchError::NoAvailableMoves)` - If the side to move has no legal move
#[must_use = "search returns the best move found"]
pub fn select_move(context: &mut SearchContext, board: &mut Board) -> Result<Move, SearchError> {
    let turn = board.turn();
    if generate_moves(board, turn, true).is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    context.reset_stats();
    board.reset_distance();

    let start = Instant::now();
    let max_depth = context.search_depth();
    let mut best_move = Move::NULL;

    for depth in 1..=max_depth {
        context.killer_moves.clear();
        let (score, mv) = context.search_root(board, depth as i32, best_move);
        best_move = mv;
        context.stats.completed_depth = depth;
        context.stats.last_score = Some(score);

        let elapsed = start.elapsed();
        debug!(
            "depth {}: best {} score {} positions {} (quiescence {}) elapsed {:?}",
            depth,
            best_move,
            score,
            context.stats.position_count,
            context.stats.quiescence_nodes,
            elapsed
        );

        if elapsed > context.config.search_time {
            break;
        }
        if score > WIN_VALUE || score < -WIN_VALUE {
            debug!("decided score at depth {}, stopping", depth);
            break;
        }
        if context.is_unique_best(board, best_move, 1 - WIN_VALUE, depth as i32) {
            debug!("{} is the only move that avoids a decided loss", best_move);
            break;
        }
    }

    context.stats.last_duration = Some(start.elapsed());
    debug!(
        "hash: {} hits, {} depth rejected, {} bound rejected, {} overwrites; null move: {}/{}",
        context.tt_hits(),
        context.tt_depth_rejected(),
        context.tt_bound_rejected(),
        context.tt_overwrites(),
        context.null_move_cutoffs(),
        context.null_move_attempts()
    );

    Ok(best_move)
}

/// `select_move`, returning the four-character move text.
pub fn select_move_text(context: &mut SearchContext, board: &mut Board) -> Result<String, SearchError> {
    select_move(context, board).map(|mv| mv.to_text())
}
