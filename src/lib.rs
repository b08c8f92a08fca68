//! Combinatorial search kernels behind a pair of algorithm demos.
//!
//! Provides three independent components:
//!
//! - **Knight's tour** ([`tour`]): depth-first search over an 8×8 board
//!   using Warnsdorff's heuristic with full backtracking. Supports open
//!   tours and closed tours (last cell one knight move from the start),
//!   from any starting cell.
//! - **LMIS** ([`lmis`]): longest strictly increasing subsequence of an
//!   integer sequence, found by exhaustive include/exclude decision-tree
//!   enumeration. Deliberately exponential; the point of the exercise is
//!   the tree-search structure, not asymptotics.
//! - **Replay** ([`replay`]): step-by-step playback of a computed path
//!   with a configurable inter-step delay and cooperative cancellation,
//!   for incremental rendering by a visualization front end.
//!
//! # Architecture
//!
//! The solvers are synchronous, deterministic, and keep all mutable
//! state local to a single call, so independent runs may execute
//! concurrently without coordination. Presentation concerns (board
//! rendering, input parsing, status display) belong to consumers; this
//! crate only receives validated parameters and hands back ordered
//! results and step events.

pub mod lmis;
pub mod replay;
pub mod tour;
