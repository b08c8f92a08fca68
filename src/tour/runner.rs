//! Tour search execution.

use super::config::TourConfig;
use super::types::{Board, Cell, BOARD_CELLS, KNIGHT_OFFSETS};

/// Outcome of a tour search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourStatus {
    /// A complete tour was found.
    Solved,
    /// Every move ordering from this start was tried without producing
    /// a full-length tour under the requested closure. A legitimate
    /// outcome the caller handles, not an error.
    Exhausted,
}

/// Result of a knight's tour search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSolution {
    /// Search outcome.
    pub status: TourStatus,

    /// The tour: all 64 cells in visit order when solved, empty when
    /// the search was exhausted.
    pub path: Vec<Cell>,

    /// Number of cells entered during the search, including re-entries
    /// after backtracking.
    pub nodes_expanded: usize,

    /// Number of times a cell was unmarked and removed from the path.
    pub backtracks: usize,
}

impl TourSolution {
    /// Whether a complete tour was found.
    pub fn is_solved(&self) -> bool {
        self.status == TourStatus::Solved
    }
}

#[derive(Default)]
struct SearchStats {
    nodes_expanded: usize,
    backtracks: usize,
}

/// Executes the knight's tour search.
pub struct TourRunner;

impl TourRunner {
    /// Runs the search from the configured start cell.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`TourConfig::validate`] first to get a descriptive error).
    pub fn run(config: &TourConfig) -> TourSolution {
        config.validate().expect("invalid TourConfig");

        let mut board = Board::new();
        let mut path = Vec::with_capacity(BOARD_CELLS);
        let mut stats = SearchStats::default();

        let solved = extend(&mut board, &mut path, config.start, 1, config, &mut stats);

        TourSolution {
            status: if solved {
                TourStatus::Solved
            } else {
                TourStatus::Exhausted
            },
            path,
            nodes_expanded: stats.nodes_expanded,
            backtracks: stats.backtracks,
        }
    }

    /// Solves from every board cell with the given closure constraint,
    /// one independent search per start, in parallel.
    ///
    /// Results are ordered row-major by start cell. Each search owns
    /// its board and path, so no coordination is needed.
    #[cfg(feature = "parallel")]
    pub fn run_all_starts(closed: bool) -> Vec<TourSolution> {
        use super::types::BOARD_SIZE;
        use rayon::prelude::*;

        (0..BOARD_CELLS)
            .into_par_iter()
            .map(|i| {
                let start = Cell::new(i % BOARD_SIZE, i / BOARD_SIZE);
                let config = TourConfig::default().with_start(start).with_closed(closed);
                Self::run(&config)
            })
            .collect()
    }
}

/// Visits `cell` as move number `count` and recurses along candidate
/// moves in Warnsdorff order. Returns `true` once the path reaches full
/// length (and, for closed tours, reconnects to the start); otherwise
/// undoes the visit and returns `false` so the caller tries its next
/// candidate.
fn extend(
    board: &mut Board,
    path: &mut Vec<Cell>,
    cell: Cell,
    count: u8,
    config: &TourConfig,
    stats: &mut SearchStats,
) -> bool {
    stats.nodes_expanded += 1;
    board.mark(cell, count);
    path.push(cell);

    if count as usize == BOARD_CELLS {
        if config.closed && !cell.is_knight_move(config.start) {
            board.clear(cell);
            path.pop();
            stats.backtracks += 1;
            return false;
        }
        return true;
    }

    for candidate in candidates(board, cell) {
        if extend(board, path, candidate, count + 1, config, stats) {
            return true;
        }
    }

    board.clear(cell);
    path.pop();
    stats.backtracks += 1;
    false
}

/// Legal continuations from `cell`, sorted ascending by Warnsdorff
/// degree. Degrees are computed against the board state before any of
/// the candidate moves is made. The sort is stable, so equal degrees
/// fall back to [`KNIGHT_OFFSETS`] enumeration order.
fn candidates(board: &Board, cell: Cell) -> Vec<Cell> {
    let mut next: Vec<(usize, Cell)> = KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| cell.offset(dx, dy))
        .filter(|&c| board.is_free(c))
        .map(|c| (board.degree(c), c))
        .collect();

    next.sort_by_key(|&(degree, _)| degree);
    next.into_iter().map(|(_, c)| c).collect()
}
