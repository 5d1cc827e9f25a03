//! Growable double-ended queue over a circular array.
//!
//! This module provides [`ArrayDeque`], a deque that stores its elements in a
//! single contiguous buffer used as a ring:
//!
//! - O(1) amortized `add_first` / `add_last`
//! - O(1) `remove_first` / `remove_last`, `peek_first` / `peek_last`
//! - O(1) `get` / `set` by logical index
//! - O(min(i, n - i)) `insert` / `remove_at` at logical index `i`
//!
//! Both ends grow into the same buffer: pushing at the front wraps around to
//! the physical end instead of moving the rest of the elements. When the
//! buffer is full it grows according to a [`GrowthPolicy`], and the elements
//! are laid out again from slot 0.
//!
//! # Failure model
//!
//! Operational errors, such as an out-of-range index or a removal from an
//! empty deque, are reported as [`DequeError`] and leave the deque untouched.
//! Invalid construction parameters are a programming error and panic.
//!
//! # Equivalence
//!
//! `contains`, `index_of`, `last_index_of` and `remove` compare elements
//! through the [`Equivalence`] given at construction. `ArrayDeque<T>` uses
//! [`PartialEqEquivalence`].
//!
//! # Examples
//!
//! ```rust
//! use ringdeque::deque::{ArrayDeque, DequeConfig, PartialEqEquivalence};
//!
//! let config = DequeConfig::new().with_initial_capacity(4).with_growth_chunk(4);
//! let mut deque: ArrayDeque<i32> = ArrayDeque::with_config(config, PartialEqEquivalence);
//!
//! for value in 1..=4 {
//!     deque.add_last(value);
//! }
//! deque.remove_first().unwrap();
//! deque.remove_first().unwrap();
//! deque.add_last(5);
//! deque.add_last(6);
//!
//! // The two new elements wrapped into the slots freed at the front.
//! assert_eq!(deque.to_vec(), vec![3, 4, 5, 6]);
//! assert_eq!(deque.capacity(), 4);
//!
//! deque.add_first(2);
//! assert_eq!(deque.capacity(), 8);
//! assert_eq!(deque.to_vec(), vec![2, 3, 4, 5, 6]);
//! ```

mod array_deque;
mod config;
mod equivalence;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;

pub use array_deque::ArrayDeque;
pub use config::DEFAULT_CAPACITY;
pub use config::DEFAULT_GROWTH_CHUNK;
pub use config::DEFAULT_GROWTH_FACTOR;
pub use config::DequeConfig;
pub use config::GrowthPolicy;
pub use equivalence::Equivalence;
pub use equivalence::PartialEqEquivalence;
pub use error::DequeError;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::IterMut;
