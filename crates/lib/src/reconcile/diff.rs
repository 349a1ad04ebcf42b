//! Pure sequence diffing via longest common subsequence.
//!
//! The reconciler uses one diff primitive at both of its levels: group key
//! sequences under exact equality, and element sequences under the caller's
//! [`Equivalence`](crate::Equivalence) relation. The functions here are
//! allocation-local and know nothing about collections, so they can be tested
//! on plain slices.

/// Computes the longest common (in-order) subsequence of `a` and `b` under
/// `eq`, returned as matched index pairs strictly increasing in both
/// coordinates.
///
/// Classic O(n·m) dynamic program. On ties the backtrack prefers consuming
/// `a` first, which keeps the earliest common run of `a` intact.
pub fn longest_common_subsequence<A, B, F>(a: &[A], b: &[B], mut eq: F) -> Vec<(usize, usize)>
where
    F: FnMut(&A, &B) -> bool,
{
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return Vec::new();
    }

    // Prefix-length table, row-major, (n + 1) x (m + 1).
    let width = m + 1;
    let mut lengths = vec![0usize; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            lengths[i * width + j] = if eq(&a[i - 1], &b[j - 1]) {
                lengths[(i - 1) * width + (j - 1)] + 1
            } else {
                lengths[(i - 1) * width + j].max(lengths[i * width + (j - 1)])
            };
        }
    }

    let mut pairs = Vec::with_capacity(lengths[n * width + m]);
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if eq(&a[i - 1], &b[j - 1]) {
            // Whenever the current pair matches, taking the diagonal is
            // always part of some maximal subsequence.
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if lengths[(i - 1) * width + j] >= lengths[i * width + (j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();
    pairs
}

/// A complete edit-script partition of two sequences.
///
/// Every index of the source appears in exactly one of `matched` (as the
/// first coordinate) or `removed`; every index of the target appears in
/// exactly one of `matched` (second coordinate) or `inserted`. All three are
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceDiff {
    /// Retained pairs `(source_index, target_index)`.
    pub matched: Vec<(usize, usize)>,
    /// Source indices with no counterpart in the target.
    pub removed: Vec<usize>,
    /// Target indices with no counterpart in the source.
    pub inserted: Vec<usize>,
}

/// Diffs `a` (source) against `b` (target) under `eq`.
pub fn diff_sequences<A, B, F>(a: &[A], b: &[B], eq: F) -> SequenceDiff
where
    F: FnMut(&A, &B) -> bool,
{
    let matched = longest_common_subsequence(a, b, eq);

    let mut removed = Vec::with_capacity(a.len() - matched.len());
    let mut inserted = Vec::with_capacity(b.len() - matched.len());
    let mut next = 0;
    for &(si, _) in &matched {
        removed.extend(next..si);
        next = si + 1;
    }
    removed.extend(next..a.len());

    next = 0;
    for &(_, ti) in &matched {
        inserted.extend(next..ti);
        next = ti + 1;
    }
    inserted.extend(next..b.len());

    SequenceDiff {
        matched,
        removed,
        inserted,
    }
}
