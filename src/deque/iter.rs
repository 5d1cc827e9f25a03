//! Iterators over [`ArrayDeque`].
//!
//! The borrowing iterators walk the (at most two) physical slot runs of the
//! live region, so they never compute a modulo per element.

use std::iter::FusedIterator;
use std::slice;

use super::ArrayDeque;

/// Borrowing iterator over the elements of an [`ArrayDeque`], front to back.
///
/// Created by [`ArrayDeque::iter`].
pub struct Iter<'a, T> {
    front: slice::Iter<'a, Option<T>>,
    back: slice::Iter<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(front: &'a [Option<T>], back: &'a [Option<T>], remaining: usize) -> Self {
        Self {
            front: front.iter(),
            back: back.iter(),
            remaining,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.front.next().or_else(|| self.back.next())?;
        self.remaining -= 1;
        slot.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.back.next_back().or_else(|| self.front.next_back())?;
        self.remaining -= 1;
        slot.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable borrowing iterator over the elements of an [`ArrayDeque`].
///
/// Created by [`ArrayDeque::iter_mut`].
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(
        front: &'a mut [Option<T>],
        back: &'a mut [Option<T>],
        remaining: usize,
    ) -> Self {
        Self {
            front: front.iter_mut(),
            back: back.iter_mut(),
            remaining,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.front.next().or_else(|| self.back.next())?;
        self.remaining -= 1;
        slot.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.back.next_back().or_else(|| self.front.next_back())?;
        self.remaining -= 1;
        slot.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of an [`ArrayDeque`].
///
/// Created by the [`IntoIterator`] impl of [`ArrayDeque`].
pub struct IntoIter<T, E> {
    deque: ArrayDeque<T, E>,
}

impl<T, E> IntoIter<T, E> {
    pub(super) const fn new(deque: ArrayDeque<T, E>) -> Self {
        Self { deque }
    }
}

impl<T, E> Iterator for IntoIter<T, E> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T, E> DoubleEndedIterator for IntoIter<T, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.remove_last().ok()
    }
}

impl<T, E> ExactSizeIterator for IntoIter<T, E> {}

impl<T, E> FusedIterator for IntoIter<T, E> {}
