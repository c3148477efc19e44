//! Iterative-deepening alpha-beta search for xiangqi.
//!
//! # Core Algorithm
//!
//! Negamax alpha-beta: every node returns its score from the point of view of
//! the side to move, and children are searched with the window negated and
//! swapped. Each iterative-deepening pass searches the root with the full
//! window `(-MATE_VALUE, MATE_VALUE)`; a pass always runs to completion and
//! the wall-clock budget is checked between passes.
//!
//! # Optimizations
//!
//! ## Transposition Table
//! Results are cached by the low bits of the position key and verified by the
//! lock. Entries are depth-preferred, mate scores are stored relative to the
//! node, and draws without a best move are never stored.
//!
//! ## Null Move Pruning
//! When not in check and holding enough material, the side to move passes and
//! the opponent is searched at `depth - 3`. If that still fails high, the node
//! is cut off, with a verification search at `depth - 2` unless the material
//! margin is large.
//!
//! ## Move Ordering
//! Hash move, then two killer moves per ply, then the remaining moves by
//! history heuristic. Quiescence orders captures by MVV/LVA.
//!
//! ## Check Extension
//! A move that gives check is searched without reducing the depth.
//!
//! ## Quiescence Search
//! At the horizon only captures are searched, on top of the static evaluation
//! as a stand-pat score. In check, every reply is searched instead.

mod history_table;
mod killer_moves;
mod move_orderer;
mod search;
pub mod transposition_table;


pub use history_table::HistoryTable;
pub use search::{select_move, select_move_text, SearchConfig, SearchContext, SearchError};
pub use transposition_table::{BoundType, TranspositionTable};

/// Maximum ply distance from the root. Positions this deep are scored statically.
pub const LIMIT_DEPTH: i32 = 64;
/// Null moves are only tried when the mover's own score exceeds this.
pub const NULL_OKAY_MARGIN: i32 = 200;
/// Above this, a null-move cutoff is trusted without a verification search.
pub const NULL_SAFE_MARGIN: i32 = 400;
/// Depth reduction for the null-move search.
pub const NULL_DEPTH_REDUCTION: i32 = 2;
