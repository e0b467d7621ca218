// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::num::NonZeroUsize;

#[allow(unused_imports)] // used in docs
use super::CircularList;

/// The amount of slots a full [`CircularList`] grows by, unless its
/// [`CapacityPolicy`] says otherwise.
pub const DEFAULT_GROWTH_INCREMENT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(increment) => increment,
    None => panic!("growth increment must be nonzero"),
};

/// How much memory a [`CircularList`] starts out with, how much it grows by,
/// and how large it's allowed to get.
///
/// With the `serde` feature, this can be read from a settings file. Every
/// field is optional there, missing ones get the [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapacityPolicy {
    /// Slots allocated when the list is created. Zero means no allocation
    /// until the first push.
    pub initial_capacity: usize,
    /// Hard ceiling for the capacity. Pushing to a full list at this capacity
    /// fails.
    pub max_capacity: usize,
    /// Slots added each time a full list grows.
    pub growth_increment: NonZeroUsize,
}

impl CapacityPolicy {
    /// A policy without an upper limit.
    pub const fn unbounded(initial_capacity: usize) -> CapacityPolicy {
        CapacityPolicy {
            initial_capacity,
            max_capacity: usize::MAX,
            growth_increment: DEFAULT_GROWTH_INCREMENT,
        }
    }

    /// A policy which refuses to grow past `max_capacity`.
    pub const fn bounded(initial_capacity: usize, max_capacity: usize) -> CapacityPolicy {
        CapacityPolicy {
            initial_capacity,
            max_capacity,
            growth_increment: DEFAULT_GROWTH_INCREMENT,
        }
    }

    /// Replaces the growth increment.
    pub const fn with_growth_increment(self, growth_increment: NonZeroUsize) -> CapacityPolicy {
        CapacityPolicy {
            growth_increment,
            ..self
        }
    }

    /// The initial capacity, clamped to the maximum capacity.
    pub fn effective_initial_capacity(&self) -> usize {
        self.initial_capacity.min(self.max_capacity)
    }

    /// The capacity a full list of `current_capacity` slots should grow to,
    /// or `None` if it's already as large as it's allowed to be.
    pub fn next_capacity(&self, current_capacity: usize) -> Option<usize> {
        let target = current_capacity
            .saturating_add(self.growth_increment.get())
            .min(self.max_capacity);
        (target > current_capacity).then_some(target)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        CapacityPolicy::unbounded(0)
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use super::CapacityPolicy;

    #[test]
    fn grows_by_increment_until_the_ceiling() {
        let policy = CapacityPolicy::bounded(0, 25);
        assert_eq!(Some(10), policy.next_capacity(0));
        assert_eq!(Some(20), policy.next_capacity(10));
        assert_eq!(Some(25), policy.next_capacity(20));
        assert_eq!(None, policy.next_capacity(25));
    }

    #[test]
    fn unbounded_growth_saturates() {
        let policy = CapacityPolicy::unbounded(0);
        assert_eq!(Some(usize::MAX), policy.next_capacity(usize::MAX - 3));
        assert_eq!(None, policy.next_capacity(usize::MAX));
    }

    #[test]
    fn initial_capacity_is_clamped() {
        let policy = CapacityPolicy::bounded(50, 3);
        assert_eq!(3, policy.effective_initial_capacity());
    }

    #[test]
    fn custom_increment() {
        let policy = CapacityPolicy::unbounded(4).with_growth_increment(NonZeroUsize::MIN);
        assert_eq!(Some(5), policy.next_capacity(4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_settings_fields_use_defaults() {
        let policy: CapacityPolicy = serde_json::from_str(r#"{ "max_capacity": 3 }"#).unwrap();
        assert_eq!(CapacityPolicy::bounded(0, 3), policy);

        let policy: CapacityPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(CapacityPolicy::default(), policy);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn zero_growth_increment_is_rejected() {
        let result = serde_json::from_str::<CapacityPolicy>(r#"{ "growth_increment": 0 }"#);
        assert!(result.is_err(), "a list that never grows shouldn't parse");
    }
}
