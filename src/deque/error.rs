//! Error types for [`ArrayDeque`](super::ArrayDeque) operations.
//!
//! Only recoverable conditions live here. A failing call never mutates the
//! deque. Invalid construction parameters are not represented: they abort
//! construction with a panic (see [`DequeConfig::validate`](super::DequeConfig::validate)).

/// Represents errors that can occur when accessing or mutating an
/// [`ArrayDeque`](super::ArrayDeque).
///
/// # Examples
///
/// ```rust
/// use ringdeque::deque::{ArrayDeque, DequeError};
///
/// let mut deque: ArrayDeque<i32> = ArrayDeque::default();
/// assert_eq!(deque.remove_first(), Err(DequeError::EmptyContainer));
///
/// deque.add_last(1);
/// assert_eq!(
///     deque.get(3),
///     Err(DequeError::IndexOutOfRange { index: 3, length: 1 })
/// );
/// assert_eq!(
///     format!("{}", DequeError::IndexOutOfRange { index: 3, length: 1 }),
///     "index out of range: the length is 1 but the index is 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeError {
    /// The index lies outside the range valid for the operation.
    ///
    /// Reads, writes and removals accept `0..length`; insertion accepts
    /// `0..=length`.
    IndexOutOfRange {
        /// The rejected logical index.
        index: usize,
        /// The number of elements at the time of the call.
        length: usize,
    },
    /// A peek or end removal was attempted on an empty deque.
    EmptyContainer,
}

impl std::fmt::Display for DequeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index out of range: the length is {length} but the index is {index}"
            ),
            Self::EmptyContainer => write!(formatter, "deque is empty"),
        }
    }
}

impl std::error::Error for DequeError {}

static_assertions::assert_impl_all!(DequeError: Send, Sync, std::error::Error);
