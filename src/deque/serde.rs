//! Serde support for [`ArrayDeque`].
//!
//! A deque serializes as a plain sequence in logical order; the physical
//! layout and the configuration are not part of the format. Deserialization
//! needs an equivalence that can be conjured from nothing, hence
//! `E: Default`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ArrayDeque, DequeConfig};

impl<T: Serialize, E> Serialize for ArrayDeque<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct ArrayDequeVisitor<T, E> {
    marker: PhantomData<(T, E)>,
}

impl<T, E> ArrayDequeVisitor<T, E> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T, E> Visitor<'de> for ArrayDequeVisitor<T, E>
where
    T: Deserialize<'de>,
    E: Default,
{
    type Value = ArrayDeque<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let config = DequeConfig::new();
        let capacity = seq
            .size_hint()
            .unwrap_or(config.initial_capacity)
            .min(MAX_PREALLOCATE);
        let mut deque =
            ArrayDeque::with_config(config.with_initial_capacity(capacity), E::default());
        while let Some(element) = seq.next_element()? {
            deque.add_last(element);
        }
        Ok(deque)
    }
}

impl<'de, T, E> Deserialize<'de> for ArrayDeque<T, E>
where
    T: Deserialize<'de>,
    E: Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArrayDequeVisitor::new())
    }
}
