//! Element equivalence used by value-based search and removal.
//!
//! [`ArrayDeque`](super::ArrayDeque) never compares elements with `==` on its
//! own. Every search goes through the [`Equivalence`] it was constructed with,
//! so callers decide what "the same element" means: case-insensitive strings,
//! records matched by key, floats within a tolerance, and so on.
//!
//! Any `Fn(&T, &T) -> bool` closure or function is an [`Equivalence`].
//! [`PartialEqEquivalence`] is the zero-sized default that delegates to
//! [`PartialEq`].
//!
//! # Examples
//!
//! ```rust
//! use ringdeque::deque::ArrayDeque;
//!
//! let mut deque = ArrayDeque::new(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
//! deque.add_last("Alpha".to_string());
//! deque.add_last("Beta".to_string());
//!
//! assert_eq!(deque.index_of(&"BETA".to_string()), Some(1));
//! ```

/// A two-argument predicate deciding whether two elements are equivalent.
pub trait Equivalence<T> {
    /// Returns `true` if `left` and `right` are equivalent.
    fn equivalent(&self, left: &T, right: &T) -> bool;
}

impl<T, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Equivalence that delegates to [`PartialEq`].
///
/// This is the default equivalence of [`ArrayDeque`](super::ArrayDeque), which
/// makes `ArrayDeque<T>` usable with [`Default`], [`FromIterator`] and serde.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartialEqEquivalence;

impl<T: PartialEq> Equivalence<T> for PartialEqEquivalence {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn same_parity(left: &i32, right: &i32) -> bool {
        left % 2 == right % 2
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn test_partial_eq_equivalence(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(PartialEqEquivalence.equivalent(&left, &right), expected);
    }

    #[rstest]
    fn test_function_pointer_is_equivalence() {
        assert!(same_parity.equivalent(&2, &4));
        assert!(!same_parity.equivalent(&2, &3));
    }

    #[rstest]
    fn test_closure_capturing_state() {
        let tolerance = 0.5_f64;
        let close = |left: &f64, right: &f64| (left - right).abs() <= tolerance;
        assert!(close.equivalent(&1.0, &1.4));
        assert!(!close.equivalent(&1.0, &1.6));
    }
}
