use std::cmp::Ordering;

/// Selects the `k` highest-scored subjects, highest first.
///
/// Subjects sharing a score form a tie-group. Whole groups are emitted in
/// descending score order; when only part of the boundary group fits the
/// remaining slots, an arbitrary subset of that group is taken. The result has
/// exactly `min(k, scored.len())` elements, so asking for more subjects than
/// exist degrades gracefully instead of erroring.
///
/// Scores are never NaN in this crate (counts, validated prices and ratings),
/// so incomparable pairs are treated as ties.
pub(crate) fn top_k<T, S: PartialOrd>(mut scored: Vec<(T, S)>, k: usize) -> Vec<T> {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(k);
    scored.into_iter().map(|(subject, _)| subject).collect()
}
