//! Pluggable element equivalence for matching across snapshots.
//!
//! Reconciliation pairs elements of the live collection with elements of the
//! target snapshot using a caller-supplied relation rather than identity, so
//! two distinct values (say, the same word with different casing) can count as
//! "the same element" for diffing purposes.

/// An equivalence relation over `T`.
///
/// Implemented for any `Fn(&T, &T) -> bool`, so a closure is usually enough:
///
/// ```
/// use regroup::Equivalence;
///
/// let caseless = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
/// assert!(caseless.equivalent(&"Pear".to_string(), &"PEAR".to_string()));
/// ```
pub trait Equivalence<T> {
    /// Returns true when `a` and `b` should be treated as the same element.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Structural equality via `PartialEq`, the default relation for `remove`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEquality;

impl<T: PartialEq> Equivalence<T> for DefaultEquality {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}
