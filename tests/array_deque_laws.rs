#![cfg(feature = "deque")]
//! Property-based tests for ArrayDeque.
//!
//! Every operation is replayed against `std::collections::VecDeque` as a
//! model. Small initial capacities and growth increments keep the ring
//! wrapping and full most of the time, which exercises every
//! insert/remove geometry.

use std::collections::VecDeque;

use proptest::prelude::*;
use ringdeque::deque::{ArrayDeque, DequeConfig, DequeError, PartialEqEquivalence};

#[derive(Debug, Clone)]
enum Operation {
    AddFirst(i32),
    AddLast(i32),
    RemoveFirst,
    RemoveLast,
    Insert(usize, i32),
    RemoveAt(usize),
    Set(usize, i32),
    RemoveValue(i32),
    EnsureCapacity(usize),
    TrimToFit,
    Clear,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => (0..8_i32).prop_map(Operation::AddFirst),
        4 => (0..8_i32).prop_map(Operation::AddLast),
        2 => Just(Operation::RemoveFirst),
        2 => Just(Operation::RemoveLast),
        4 => (0..24_usize, 0..8_i32).prop_map(|(index, value)| Operation::Insert(index, value)),
        4 => (0..24_usize).prop_map(Operation::RemoveAt),
        2 => (0..24_usize, 0..8_i32).prop_map(|(index, value)| Operation::Set(index, value)),
        2 => (0..8_i32).prop_map(Operation::RemoveValue),
        1 => (0..32_usize).prop_map(Operation::EnsureCapacity),
        1 => Just(Operation::TrimToFit),
        1 => Just(Operation::Clear),
    ]
}

fn config_strategy() -> impl Strategy<Value = DequeConfig> {
    prop_oneof![
        (0..5_usize, 0.0..2.0_f64).prop_map(|(capacity, factor)| {
            DequeConfig::new()
                .with_initial_capacity(capacity)
                .with_growth_factor(factor)
        }),
        (0..5_usize, 0..4_usize).prop_map(|(capacity, chunk)| {
            DequeConfig::new()
                .with_initial_capacity(capacity)
                .with_growth_chunk(chunk)
        }),
    ]
}

fn out_of_range(index: usize, length: usize) -> DequeError {
    DequeError::IndexOutOfRange { index, length }
}

fn apply(
    deque: &mut ArrayDeque<i32>,
    model: &mut VecDeque<i32>,
    operation: &Operation,
) -> Result<(), TestCaseError> {
    let capacity_before = deque.capacity();
    let length = model.len();
    match *operation {
        Operation::AddFirst(value) => {
            deque.add_first(value);
            model.push_front(value);
        }
        Operation::AddLast(value) => {
            deque.add_last(value);
            model.push_back(value);
        }
        Operation::RemoveFirst => {
            prop_assert_eq!(deque.remove_first().ok(), model.pop_front());
        }
        Operation::RemoveLast => {
            prop_assert_eq!(deque.remove_last().ok(), model.pop_back());
        }
        Operation::Insert(index, value) => {
            if index <= length {
                prop_assert_eq!(deque.insert(index, value), Ok(()));
                model.insert(index, value);
            } else {
                prop_assert_eq!(deque.insert(index, value), Err(out_of_range(index, length)));
                prop_assert_eq!(deque.capacity(), capacity_before);
            }
        }
        Operation::RemoveAt(index) => {
            let missing = if index == 0 {
                DequeError::EmptyContainer
            } else {
                out_of_range(index, length)
            };
            let expected = model.remove(index).ok_or(missing);
            prop_assert_eq!(deque.remove_at(index), expected);
        }
        Operation::Set(index, value) => {
            let expected = model
                .get_mut(index)
                .map(|slot| std::mem::replace(slot, value))
                .ok_or(out_of_range(index, length));
            prop_assert_eq!(deque.set(index, value), expected);
        }
        Operation::RemoveValue(value) => {
            let position = model.iter().position(|&candidate| candidate == value);
            if let Some(position) = position {
                model.remove(position);
            }
            prop_assert_eq!(deque.remove(&value), position.is_some());
        }
        Operation::EnsureCapacity(minimum) => {
            let capacity = deque.ensure_capacity(minimum);
            prop_assert_eq!(capacity, deque.capacity());
            prop_assert!(capacity >= minimum);
            prop_assert!(capacity >= capacity_before);
        }
        Operation::TrimToFit => {
            deque.trim_to_fit();
            prop_assert_eq!(deque.capacity(), model.len());
        }
        Operation::Clear => {
            deque.clear();
            model.clear();
            prop_assert_eq!(deque.capacity(), capacity_before);
        }
    }
    Ok(())
}

proptest! {
    /// Model Law: any operation sequence leaves the deque equal to the model.
    #[test]
    fn prop_matches_vec_deque_model(
        config in config_strategy(),
        operations in prop::collection::vec(operation_strategy(), 0..120)
    ) {
        let mut deque: ArrayDeque<i32> = ArrayDeque::with_config(config, PartialEqEquivalence);
        let mut model = VecDeque::new();

        for operation in &operations {
            apply(&mut deque, &mut model, operation)?;

            prop_assert_eq!(deque.len(), model.len());
            prop_assert!(deque.len() <= deque.capacity());
            prop_assert_eq!(deque.to_vec(), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(deque.peek_first().ok(), model.front());
            prop_assert_eq!(deque.peek_last().ok(), model.back());
        }
    }

    /// Removal Law: removals never change capacity.
    #[test]
    fn prop_removal_keeps_capacity(
        elements in prop::collection::vec(any::<i32>(), 1..40),
        removals in prop::collection::vec(0..40_usize, 0..40)
    ) {
        let mut deque: ArrayDeque<i32> = elements.iter().copied().collect();
        let capacity = deque.capacity();
        for index in removals {
            let _ = deque.remove_at(index % (deque.len() + 1));
            prop_assert_eq!(deque.capacity(), capacity);
        }
    }

    /// Search Law: index_of and last_index_of agree with a linear scan.
    #[test]
    fn prop_search_agrees_with_scan(
        rotation in 0..16_usize,
        elements in prop::collection::vec(0..6_i32, 0..16),
        target in 0..6_i32
    ) {
        let mut deque: ArrayDeque<i32> = ArrayDeque::with_capacity(16, PartialEqEquivalence);
        for _ in 0..rotation {
            deque.add_last(0);
        }
        for _ in 0..rotation {
            deque.remove_first().unwrap();
        }
        deque.extend(elements.iter().copied());

        prop_assert_eq!(deque.index_of(&target), elements.iter().position(|&value| value == target));
        prop_assert_eq!(deque.last_index_of(&target), elements.iter().rposition(|&value| value == target));
        prop_assert_eq!(deque.contains(&target), elements.contains(&target));
    }

    /// Iterator Law: forward, backward and owning iteration agree with to_vec.
    #[test]
    fn prop_iterators_agree_with_to_vec(
        front in prop::collection::vec(any::<i32>(), 0..20),
        back in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let mut deque: ArrayDeque<i32> = ArrayDeque::with_capacity(4, PartialEqEquivalence);
        for &value in &front {
            deque.add_first(value);
        }
        deque.extend(back.iter().copied());

        let linear = deque.to_vec();
        prop_assert_eq!(deque.iter().len(), linear.len());
        prop_assert_eq!(deque.iter().copied().collect::<Vec<_>>(), linear.clone());
        let mut reversed: Vec<i32> = deque.iter().rev().copied().collect();
        reversed.reverse();
        prop_assert_eq!(reversed, linear.clone());
        prop_assert_eq!(deque.into_iter().collect::<Vec<_>>(), linear);
    }

    /// Growth Law: ensure_capacity never changes the logical contents.
    #[test]
    fn prop_growth_preserves_contents(
        elements in prop::collection::vec(any::<i32>(), 0..30),
        rotation in 0..30_usize,
        extra in 1..30_usize
    ) {
        let mut deque: ArrayDeque<i32> = elements.iter().copied().collect();
        for _ in 0..rotation.min(elements.len()) {
            let value = deque.remove_first().unwrap();
            deque.add_last(value);
        }
        let before = deque.to_vec();
        let capacity = deque.capacity();

        prop_assert!(deque.ensure_capacity(capacity + extra) > capacity);
        prop_assert_eq!(deque.to_vec(), before.clone());
        deque.trim_to_fit();
        prop_assert_eq!(deque.capacity(), before.len());
        prop_assert_eq!(deque.to_vec(), before);
    }
}
