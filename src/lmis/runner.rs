//! LMIS enumeration engine.

use super::types::LmisResult;

/// Executes the exhaustive LMIS decision-tree search.
pub struct LmisRunner;

impl LmisRunner {
    /// Finds the longest strictly increasing subsequence of `seq`.
    ///
    /// Ties between equal-length subsequences resolve to the first one
    /// found: include is explored before exclude at every position, so
    /// the earliest-starting maximal run wins. Empty input (rejected by
    /// callers before reaching this crate) yields an empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use combisearch::lmis::LmisRunner;
    ///
    /// let result = LmisRunner::run(&[3, 10, 2, 1, 20]);
    /// assert_eq!(result.values, vec![3, 10, 20]);
    /// assert_eq!(result.source_indices, vec![0, 1, 4]);
    /// ```
    pub fn run(seq: &[i64]) -> LmisResult {
        let mut best = Vec::new();
        let mut candidate = Vec::new();
        let mut leaves = 0usize;

        explore(seq, None, 0, &mut candidate, &mut best, &mut leaves);

        // Safety net: the tree search always reaches at least a
        // length-1 candidate for non-empty input, so an empty best here
        // means the enumeration is broken. Substitute the maximum value
        // and flag it rather than returning nothing.
        if best.is_empty() && !seq.is_empty() {
            let max = *seq.iter().max().expect("non-empty sequence");
            let index = seq.iter().position(|&v| v == max).expect("max exists");
            return LmisResult {
                values: vec![max],
                source_indices: vec![index],
                used_fallback: true,
                leaves_visited: leaves,
            };
        }

        let source_indices = recover_indices(seq, &best);
        LmisResult {
            values: best,
            source_indices,
            used_fallback: false,
            leaves_visited: leaves,
        }
    }
}

/// Decides position `index`: include it (only while the candidate stays
/// strictly increasing), then exclude it. At the end of the sequence
/// the candidate replaces `best` only when strictly longer, so the
/// first maximal-length candidate is kept.
fn explore(
    seq: &[i64],
    last_included: Option<usize>,
    index: usize,
    candidate: &mut Vec<i64>,
    best: &mut Vec<i64>,
    leaves: &mut usize,
) {
    if index == seq.len() {
        *leaves += 1;
        if candidate.len() > best.len() {
            best.clone_from(candidate);
        }
        return;
    }

    let legal = match last_included {
        None => true,
        Some(prev) => seq[index] > seq[prev],
    };
    if legal {
        candidate.push(seq[index]);
        explore(seq, Some(index), index + 1, candidate, best, leaves);
        candidate.pop();
    }

    explore(seq, last_included, index + 1, candidate, best, leaves);
}

/// Recovers source indices by scanning the input once and greedily
/// matching `values` in order. When a value repeats in the input, the
/// first not-yet-consumed occurrence is used.
fn recover_indices(seq: &[i64], values: &[i64]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(values.len());
    let mut next = 0usize;
    for (i, &v) in seq.iter().enumerate() {
        if next < values.len() && v == values[next] {
            indices.push(i);
            next += 1;
        }
    }
    indices
}
