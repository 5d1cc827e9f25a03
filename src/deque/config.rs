//! Construction parameters for [`ArrayDeque`](super::ArrayDeque).
//!
//! A [`DequeConfig`] carries the initial capacity and the growth rule used
//! whenever the backing buffer runs out of room. Invalid values are a
//! programming error: [`DequeConfig::validate`] panics, and every
//! `ArrayDeque` constructor calls it before allocating.
//!
//! # Examples
//!
//! ```rust
//! use ringdeque::deque::{DequeConfig, GrowthPolicy};
//!
//! let config = DequeConfig::new()
//!     .with_initial_capacity(4)
//!     .with_growth_chunk(8);
//!
//! assert_eq!(config.growth_policy, GrowthPolicy::Absolute);
//! assert_eq!(config.next_capacity(4, 5), 12);
//! ```

/// Default number of slots allocated at construction.
pub const DEFAULT_CAPACITY: usize = 10;

/// Default factor for [`GrowthPolicy::Relative`]: each growth doubles the buffer.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.0;

/// Default chunk for [`GrowthPolicy::Absolute`].
pub const DEFAULT_GROWTH_CHUNK: usize = 10;

/// How the backing buffer expands when it is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GrowthPolicy {
    /// New capacity is `floor(capacity * (1 + growth_factor))`.
    #[default]
    Relative,
    /// New capacity is `capacity + growth_chunk`.
    Absolute,
}

/// Construction parameters for an [`ArrayDeque`](super::ArrayDeque).
///
/// Only the field selected by `growth_policy` is consulted when growing; the
/// other one is kept so a config can be switched between policies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DequeConfig {
    /// Number of slots allocated at construction.
    pub initial_capacity: usize,
    /// The growth rule.
    pub growth_policy: GrowthPolicy,
    /// Multiplier increment for [`GrowthPolicy::Relative`]. Must be finite and non-negative.
    pub growth_factor: f64,
    /// Increment for [`GrowthPolicy::Absolute`].
    pub growth_chunk: usize,
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DequeConfig {
    /// Creates the default configuration: capacity 10, relative growth by 1.0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_policy: GrowthPolicy::Relative,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            growth_chunk: DEFAULT_GROWTH_CHUNK,
        }
    }

    /// Sets the initial capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Switches to relative growth with the given factor.
    #[must_use]
    pub const fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_policy = GrowthPolicy::Relative;
        self.growth_factor = growth_factor;
        self
    }

    /// Switches to absolute growth with the given chunk.
    #[must_use]
    pub const fn with_growth_chunk(mut self, growth_chunk: usize) -> Self {
        self.growth_policy = GrowthPolicy::Absolute;
        self.growth_chunk = growth_chunk;
        self
    }

    /// Checks the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `growth_factor` is negative, NaN or infinite. Capacity and
    /// chunk are unsigned and cannot be negative.
    pub fn validate(&self) {
        assert!(
            self.growth_factor.is_finite() && self.growth_factor >= 0.0,
            "invalid growth factor: {} (must be finite and non-negative)",
            self.growth_factor
        );
    }

    /// Computes the capacity to grow to from `current` so that at least
    /// `minimum` slots are available.
    ///
    /// The policy result is clamped up to `minimum`, so a zero factor, a zero
    /// chunk or a zero current capacity still makes progress.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn next_capacity(&self, current: usize, minimum: usize) -> usize {
        let grown = match self.growth_policy {
            GrowthPolicy::Relative => (current as f64 * (1.0 + self.growth_factor)).floor() as usize,
            GrowthPolicy::Absolute => current.saturating_add(self.growth_chunk),
        };
        grown.max(minimum)
    }
}
