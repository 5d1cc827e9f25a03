#![cfg(feature = "serde")]

//! Integration tests for serde support in ringdeque.
//!
//! These tests verify that deques and their configuration serialize and
//! deserialize through serde_json, independent of the physical ring layout.

use ringdeque::deque::{ArrayDeque, DequeConfig, GrowthPolicy, PartialEqEquivalence};
use rstest::rstest;

// =============================================================================
// ArrayDeque Integration Tests
// =============================================================================

#[rstest]
fn test_deque_json_roundtrip_after_wraparound() {
    let mut deque: ArrayDeque<i32> = ArrayDeque::with_capacity(4, PartialEqEquivalence);
    deque.extend([1, 2, 3, 4]);
    deque.remove_first().unwrap();
    deque.remove_first().unwrap();
    deque.add_last(5);
    deque.add_last(6);

    let json = serde_json::to_string(&deque).unwrap();
    assert_eq!(json, "[3,4,5,6]");

    let restored: ArrayDeque<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(deque, restored);
}

#[rstest]
fn test_deque_of_strings() {
    let deque: ArrayDeque<String> = ["alpha", "beta"].into_iter().map(String::from).collect();
    let json = serde_json::to_string(&deque).unwrap();
    let restored: ArrayDeque<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.index_of(&"beta".to_string()), Some(1));
}

#[rstest]
fn test_nested_deques() {
    let inner: ArrayDeque<i32> = (1..=3).collect();
    let mut outer: ArrayDeque<ArrayDeque<i32>> = ArrayDeque::default();
    outer.add_last(inner.clone());
    outer.add_first(ArrayDeque::default());

    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[],[1,2,3]]");
    let restored: ArrayDeque<ArrayDeque<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.get(1), Ok(&inner));
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<ArrayDeque<i32>, _> = serde_json::from_str("{\"a\":1}");
    assert!(result.is_err());
}

// =============================================================================
// DequeConfig Integration Tests
// =============================================================================

#[rstest]
fn test_config_drives_construction() {
    let config: DequeConfig = serde_json::from_str(
        r#"{"initial_capacity":2,"growth_policy":"absolute","growth_chunk":3}"#,
    )
    .unwrap();
    assert_eq!(config.growth_policy, GrowthPolicy::Absolute);

    let mut deque: ArrayDeque<i32> = ArrayDeque::with_config(config, PartialEqEquivalence);
    deque.extend([1, 2, 3]);
    assert_eq!(deque.capacity(), 5);
}

#[rstest]
fn test_empty_config_object_is_default() {
    let config: DequeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, DequeConfig::default());
}
