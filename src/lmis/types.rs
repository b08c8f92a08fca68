//! LMIS result type.

/// Result of an LMIS search.
///
/// Invariants: `values` is strictly increasing and is a subsequence of
/// the input; `source_indices` is strictly increasing, has the same
/// length as `values`, and `input[source_indices[k]] == values[k]` for
/// every `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LmisResult {
    /// The longest strictly increasing subsequence found.
    pub values: Vec<i64>,

    /// Positions in the input each value was taken from.
    pub source_indices: Vec<usize>,

    /// Whether the single-element safety net produced this result
    /// instead of the tree search. The enumeration always finds at
    /// least a length-1 subsequence for non-empty input, so a set flag
    /// indicates the enumeration misbehaved and is worth surfacing in
    /// diagnostics.
    pub used_fallback: bool,

    /// Number of decision-tree leaves reached during enumeration.
    pub leaves_visited: usize,
}

impl LmisResult {
    /// Length of the subsequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the subsequence is empty (only possible for empty input).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
