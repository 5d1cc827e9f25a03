//! # ringdeque
//!
//! A growable double-ended queue backed by a circular array.
//!
//! ## Overview
//!
//! [`deque::ArrayDeque`] keeps its elements in one contiguous buffer used as a
//! ring, so both ends grow in amortized constant time without shifting the
//! rest of the elements. On top of the usual deque operations it offers
//! constant-time indexed access, insertion and removal at any position that
//! moves only the shorter side, configurable growth, and value searches
//! through a caller-supplied equivalence.
//!
//! ## Feature Flags
//!
//! - `deque`: the [`deque`] module (default)
//! - `serde`: `Serialize`/`Deserialize` for `ArrayDeque` and `DequeConfig`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ringdeque::prelude::*;
//!
//! let mut deque: ArrayDeque<&str> = ArrayDeque::default();
//! deque.add_last("b");
//! deque.add_first("a");
//! deque.add_last("c");
//!
//! assert_eq!(deque.peek_first(), Ok(&"a"));
//! assert_eq!(deque.get(1), Ok(&"b"));
//! assert_eq!(deque.last_index_of(&"c"), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ringdeque::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "deque")]
    pub use crate::deque::*;
}

#[cfg(feature = "deque")]
pub mod deque;
