//! Longest monotonically increasing subsequence (LMIS).
//!
//! Exhaustive binary decision-tree enumeration: every position is
//! either included (legal only while the candidate stays strictly
//! increasing) or excluded, and the longest candidate seen at any leaf
//! wins. The include branch is explored first, so ties go to the
//! earliest-starting maximal run. O(2^n); intended for demo-scale
//! inputs where the tree structure itself is the point, not for
//! production-scale sequences where the O(n log n) patience algorithm
//! would apply.

mod runner;
mod types;

pub use runner::LmisRunner;
pub use types::LmisResult;
