//! Growable double-ended queue over a circular buffer.
//!
//! # Layout
//!
//! The deque owns a boxed slice of slots. Live elements occupy `size`
//! consecutive slots starting at `first` and wrapping past the physical end;
//! every other slot is a tombstone (`None`). `last` is the slot one past the
//! logically-last element, modulo capacity, so a full buffer has
//! `first == last` exactly like an empty one. Occupancy is always read from
//! `size`.
//!
//! ```text
//! contiguous            wrapped                 wrap point at slot 0
//! [_ _ a b c d _ _]     [c d _ _ _ _ a b]       [_ _ _ _ a b c d]
//!      ^first  ^last        ^last    ^first              ^first    last = 0
//! ```
//!
//! All three shapes are split into at most two physical slot ranges by one
//! routine, which backs linearization, relinearization on growth or trim, and
//! iteration.
//!
//! # Complexity
//!
//! | Operation                          | Cost                  |
//! |------------------------------------|-----------------------|
//! | `add_first` / `add_last`           | O(1) amortized        |
//! | `remove_first` / `remove_last`     | O(1)                  |
//! | `get` / `set`                      | O(1)                  |
//! | `insert` / `remove_at` at `i`      | O(min(i, len - i))    |
//! | `ensure_capacity` / `trim_to_fit`  | O(len) when reallocating |
//! | `index_of` / `contains` / `remove` | O(len)                |

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Range};

use super::config::DequeConfig;
use super::equivalence::{Equivalence, PartialEqEquivalence};
use super::error::DequeError;
use super::iter::{IntoIter, Iter, IterMut};

/// A double-ended queue backed by a growable circular array.
///
/// Elements can be added and removed at both ends in amortized constant time,
/// read and replaced by logical index in constant time, and inserted or
/// removed anywhere by shifting only the shorter side.
///
/// Value-based searches use the [`Equivalence`] supplied at construction
/// instead of `==`. The default, [`PartialEqEquivalence`], delegates to
/// [`PartialEq`].
///
/// # Examples
///
/// ```rust
/// use ringdeque::deque::ArrayDeque;
///
/// let mut deque = ArrayDeque::with_capacity(4, |a: &i32, b: &i32| a == b);
/// deque.add_last(1);
/// deque.add_last(2);
/// deque.add_first(0);
/// deque.insert(2, 9).unwrap();
///
/// assert_eq!(deque.to_vec(), vec![0, 1, 9, 2]);
/// assert_eq!(deque.remove_at(1), Ok(1));
/// assert_eq!(deque.index_of(&2), Some(2));
/// ```
#[derive(Clone)]
pub struct ArrayDeque<T, E = PartialEqEquivalence> {
    buffer: Box<[Option<T>]>,
    first: usize,
    last: usize,
    size: usize,
    config: DequeConfig,
    equivalence: E,
}

impl<T, E> ArrayDeque<T, E> {
    /// Creates an empty deque with the default configuration.
    #[must_use]
    pub fn new(equivalence: E) -> Self {
        Self::with_config(DequeConfig::new(), equivalence)
    }

    /// Creates an empty deque with `capacity` slots and default relative growth.
    #[must_use]
    pub fn with_capacity(capacity: usize, equivalence: E) -> Self {
        Self::with_config(DequeConfig::new().with_initial_capacity(capacity), equivalence)
    }

    /// Creates an empty deque that grows by `capacity * (1 + growth_factor)`.
    ///
    /// # Panics
    ///
    /// Panics if `growth_factor` is negative, NaN or infinite.
    #[must_use]
    pub fn with_growth_factor(capacity: usize, growth_factor: f64, equivalence: E) -> Self {
        Self::with_config(
            DequeConfig::new()
                .with_initial_capacity(capacity)
                .with_growth_factor(growth_factor),
            equivalence,
        )
    }

    /// Creates an empty deque that grows by a fixed `growth_chunk` of slots.
    #[must_use]
    pub fn with_growth_chunk(capacity: usize, growth_chunk: usize, equivalence: E) -> Self {
        Self::with_config(
            DequeConfig::new()
                .with_initial_capacity(capacity)
                .with_growth_chunk(growth_chunk),
            equivalence,
        )
    }

    /// Creates an empty deque from an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (see [`DequeConfig::validate`]).
    #[must_use]
    pub fn with_config(config: DequeConfig, equivalence: E) -> Self {
        config.validate();
        Self {
            buffer: allocate(config.initial_capacity),
            first: 0,
            last: 0,
            size: 0,
            config,
            equivalence,
        }
    }

    /// Returns the configuration this deque was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> DequeConfig {
        self.config
    }

    /// Returns the equivalence used by value-based searches.
    #[inline]
    #[must_use]
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    // =========================================================================
    // Capacity management
    // =========================================================================

    /// Grows the backing buffer so that it holds at least `minimum` slots and
    /// returns the resulting capacity.
    ///
    /// Does nothing if the buffer is already large enough. Otherwise the new
    /// capacity follows the configured growth policy, clamped up to
    /// `minimum`, and the elements are moved to the start of the new buffer in
    /// logical order.
    pub fn ensure_capacity(&mut self, minimum: usize) -> usize {
        let capacity = self.capacity();
        if minimum <= capacity {
            return capacity;
        }
        let new_capacity = self.config.next_capacity(capacity, minimum);
        tracing::trace!(
            old_capacity = capacity,
            new_capacity,
            len = self.size,
            "growing ring buffer"
        );
        self.relinearize(new_capacity);
        new_capacity
    }

    /// Shrinks the backing buffer to exactly [`len`](Self::len) slots.
    ///
    /// Does nothing if there is no spare slot.
    pub fn trim_to_fit(&mut self) {
        let capacity = self.capacity();
        if capacity > self.size {
            tracing::trace!(
                old_capacity = capacity,
                new_capacity = self.size,
                "trimming ring buffer"
            );
            self.relinearize(self.size);
        }
    }

    /// Moves every element into a fresh buffer of `new_capacity` slots,
    /// starting at slot 0 in logical order.
    fn relinearize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        let (front, back) = self.slot_ranges();
        let mut buffer = allocate(new_capacity);
        for (target, source) in buffer.iter_mut().zip(front.chain(back)) {
            *target = self.buffer[source].take();
        }
        self.buffer = buffer;
        self.first = 0;
        self.last = if new_capacity == 0 {
            0
        } else {
            self.size % new_capacity
        };
    }

    // =========================================================================
    // End operations
    // =========================================================================

    /// Prepends an element, growing the buffer if it is full.
    pub fn add_first(&mut self, element: T) {
        self.ensure_capacity(self.size + 1);
        self.first = self.previous_slot(self.first);
        self.buffer[self.first] = Some(element);
        self.size += 1;
    }

    /// Appends an element, growing the buffer if it is full.
    pub fn add_last(&mut self, element: T) {
        self.ensure_capacity(self.size + 1);
        self.buffer[self.last] = Some(element);
        self.last = self.next_slot(self.last);
        self.size += 1;
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn remove_first(&mut self) -> Result<T, DequeError> {
        if self.size == 0 {
            return Err(DequeError::EmptyContainer);
        }
        let element = self.take_live(self.first);
        self.first = self.next_slot(self.first);
        self.size -= 1;
        Ok(element)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T, DequeError> {
        if self.size == 0 {
            return Err(DequeError::EmptyContainer);
        }
        self.last = self.previous_slot(self.last);
        self.size -= 1;
        Ok(self.take_live(self.last))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn peek_first(&self) -> Result<&T, DequeError> {
        if self.size == 0 {
            return Err(DequeError::EmptyContainer);
        }
        Ok(self.live(self.first))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn peek_last(&self) -> Result<&T, DequeError> {
        if self.size == 0 {
            return Err(DequeError::EmptyContainer);
        }
        Ok(self.live(self.previous_slot(self.last)))
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn peek_first_mut(&mut self) -> Result<&mut T, DequeError> {
        if self.size == 0 {
            return Err(DequeError::EmptyContainer);
        }
        Ok(self.live_mut(self.first))
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn peek_last_mut(&mut self) -> Result<&mut T, DequeError> {
        if self.size == 0 {
            return Err(DequeError::EmptyContainer);
        }
        let physical = self.previous_slot(self.last);
        Ok(self.live_mut(physical))
    }

    // =========================================================================
    // Indexed access
    // =========================================================================

    /// Returns a reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IndexOutOfRange`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, DequeError> {
        self.check_index(index)?;
        Ok(self.live(self.physical_index(index)))
    }

    /// Returns a mutable reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IndexOutOfRange`] unless `index < len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DequeError> {
        self.check_index(index)?;
        let physical = self.physical_index(index);
        Ok(self.live_mut(physical))
    }

    /// Replaces the element at logical `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IndexOutOfRange`] unless `index < len()`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, DequeError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    // =========================================================================
    // Arbitrary-position mutation
    // =========================================================================

    /// Inserts an element so that it ends up at logical `index`.
    ///
    /// Index `0` and index `len()` are end insertions. Anywhere else the
    /// shorter of the two runs around `index` moves by one slot.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IndexOutOfRange`] if `index > len()`. The deque
    /// is left untouched, capacity included.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), DequeError> {
        if index == 0 {
            self.add_first(element);
            return Ok(());
        }
        if index == self.size {
            self.add_last(element);
            return Ok(());
        }
        if index > self.size {
            return Err(DequeError::IndexOutOfRange {
                index,
                length: self.size,
            });
        }

        self.ensure_capacity(self.size + 1);
        let gap = if index < self.size - index {
            self.open_gap_in_front(index)
        } else {
            self.open_gap_behind(index)
        };
        self.buffer[gap] = Some(element);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at logical `index`.
    ///
    /// The first and last index are end removals. Anywhere else the shorter
    /// of the two runs around `index` moves by one slot to close the gap.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] for index `0` on an empty
    /// deque, like [`remove_first`](Self::remove_first), and
    /// [`DequeError::IndexOutOfRange`] for any other `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DequeError> {
        if index == 0 {
            return self.remove_first();
        }
        self.check_index(index)?;
        if index == self.size - 1 {
            return self.remove_last();
        }

        let gap = self.physical_index(index);
        let element = self.take_live(gap);
        let behind = self.size - 1 - index;
        if index < behind {
            self.close_gap_from_front(gap, index);
        } else {
            self.close_gap_from_back(gap, behind);
        }
        self.size -= 1;
        Ok(element)
    }

    /// Moves the first `count` elements one slot toward the front, retreating
    /// `first`, and returns the slot vacated behind them.
    ///
    /// Requires a free slot before `first`.
    fn open_gap_in_front(&mut self, count: usize) -> usize {
        let mut target = self.previous_slot(self.first);
        self.first = target;
        for _ in 0..count {
            let source = self.next_slot(target);
            self.buffer[target] = self.buffer[source].take();
            target = source;
        }
        target
    }

    /// Moves the elements from logical `index` to the end one slot toward the
    /// back, advancing `last`, and returns the slot vacated at `index`.
    ///
    /// Requires a free slot at `last`.
    fn open_gap_behind(&mut self, index: usize) -> usize {
        let mut target = self.last;
        self.last = self.next_slot(self.last);
        for _ in index..self.size {
            let source = self.previous_slot(target);
            self.buffer[target] = self.buffer[source].take();
            target = source;
        }
        target
    }

    /// Fills the empty slot `gap` by moving the `count` elements before it one
    /// slot toward the back, then advances `first`.
    fn close_gap_from_front(&mut self, gap: usize, count: usize) {
        let mut target = gap;
        for _ in 0..count {
            let source = self.previous_slot(target);
            self.buffer[target] = self.buffer[source].take();
            target = source;
        }
        self.first = self.next_slot(self.first);
    }

    /// Fills the empty slot `gap` by moving the `count` elements after it one
    /// slot toward the front, then retreats `last`.
    fn close_gap_from_back(&mut self, gap: usize, count: usize) {
        let mut target = gap;
        for _ in 0..count {
            let source = self.next_slot(target);
            self.buffer[target] = self.buffer[source].take();
            target = source;
        }
        self.last = self.previous_slot(self.last);
    }

    /// Removes every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        let (front, back) = self.slot_ranges();
        for physical in front.chain(back) {
            self.buffer[physical] = None;
        }
        self.first = 0;
        self.last = 0;
        self.size = 0;
    }

    // =========================================================================
    // Linearization and iteration
    // =========================================================================

    /// Returns the elements in logical order as a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let (front, back) = self.slot_ranges();
        front
            .chain(back)
            .map(|physical| self.live(physical).clone())
            .collect()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.slot_ranges();
        Iter::new(&self.buffer[front], &self.buffer[back], self.size)
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.slot_ranges();
        let size = self.size;
        let (low, high) = self.buffer.split_at_mut(front.start);
        IterMut::new(&mut high[..front.len()], &mut low[back], size)
    }

    /// Splits the live region into its physical slot ranges.
    ///
    /// The first range starts at `first`. The second is empty unless the
    /// region wraps past the physical end, in which case it starts at slot 0.
    /// A region ending exactly at the physical end (`last == 0`) is a single
    /// range.
    fn slot_ranges(&self) -> (Range<usize>, Range<usize>) {
        let room_to_end = self.capacity() - self.first;
        if self.size <= room_to_end {
            (self.first..self.first + self.size, 0..0)
        } else {
            (self.first..self.capacity(), 0..self.size - room_to_end)
        }
    }

    // =========================================================================
    // Slot arithmetic
    // =========================================================================

    #[inline]
    fn physical_index(&self, logical: usize) -> usize {
        (self.first + logical) % self.capacity()
    }

    #[inline]
    fn next_slot(&self, physical: usize) -> usize {
        if physical + 1 == self.capacity() {
            0
        } else {
            physical + 1
        }
    }

    #[inline]
    fn previous_slot(&self, physical: usize) -> usize {
        if physical == 0 {
            self.capacity() - 1
        } else {
            physical - 1
        }
    }

    const fn check_index(&self, index: usize) -> Result<(), DequeError> {
        if index < self.size {
            Ok(())
        } else {
            Err(DequeError::IndexOutOfRange {
                index,
                length: self.size,
            })
        }
    }

    fn live(&self, physical: usize) -> &T {
        let Some(element) = self.buffer[physical].as_ref() else {
            unreachable!("slot {physical} is inside the live region but empty")
        };
        element
    }

    fn live_mut(&mut self, physical: usize) -> &mut T {
        let Some(element) = self.buffer[physical].as_mut() else {
            unreachable!("slot {physical} is inside the live region but empty")
        };
        element
    }

    fn take_live(&mut self, physical: usize) -> T {
        let Some(element) = self.buffer[physical].take() else {
            unreachable!("slot {physical} is inside the live region but empty")
        };
        element
    }
}

impl<T, E: Equivalence<T>> ArrayDeque<T, E> {
    /// Returns `true` if some element is equivalent to `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Returns the logical index of the first element equivalent to `element`.
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter()
            .position(|candidate| self.equivalence.equivalent(candidate, element))
    }

    /// Returns the logical index of the last element equivalent to `element`.
    #[must_use]
    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.iter()
            .rposition(|candidate| self.equivalence.equivalent(candidate, element))
    }

    /// Removes the first element equivalent to `element`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        self.index_of(element)
            .is_some_and(|index| self.remove_at(index).is_ok())
    }
}

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T, E: Default> Default for ArrayDeque<T, E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<T, E> Index<usize> for ArrayDeque<T, E> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|error| panic!("{error}"))
    }
}

impl<T, E> IndexMut<usize> for ArrayDeque<T, E> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap_or_else(|error| panic!("{error}"))
    }
}

impl<T: PartialEq, E> PartialEq for ArrayDeque<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq, E> Eq for ArrayDeque<T, E> {}

impl<T: Hash, E> Hash for ArrayDeque<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for ArrayDeque<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for ArrayDeque<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T, E> Extend<T> for ArrayDeque<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.ensure_capacity(self.size.saturating_add(lower));
        }
        for element in iter {
            self.add_last(element);
        }
    }
}

impl<T, E: Default> FromIterator<T> for ArrayDeque<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::default();
        deque.extend(iter);
        deque
    }
}

impl<T, E> IntoIterator for ArrayDeque<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T, E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, E> IntoIterator for &'a ArrayDeque<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut ArrayDeque<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

static_assertions::assert_impl_all!(ArrayDeque<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(ArrayDeque<std::rc::Rc<i32>>: Send, Sync);
