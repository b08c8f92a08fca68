//! Knight's tour search.
//!
//! Depth-first search with Warnsdorff's heuristic: at each cell, legal
//! continuations are tried in ascending order of their own onward move
//! count, so the most constrained square is visited first. Unlike the
//! pure greedy rule, the search backtracks, so it is complete: if any
//! tour exists under the requested closure it will eventually be found,
//! though some closed-tour starts are impractically expensive.
//!
//! # References
//!
//! - Warnsdorff (1823), "Des Rösselsprunges einfachste und allgemeinste
//!   Lösung"
//! - Squirrel & Cull (1996), "A Warnsdorff-Rule Algorithm for Knight's
//!   Tours on Square Chessboards"

mod config;
mod runner;
mod types;

pub use config::TourConfig;
pub use runner::{TourRunner, TourSolution, TourStatus};
pub use types::{Board, Cell, BOARD_CELLS, BOARD_SIZE, KNIGHT_OFFSETS};
