// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt;

use thiserror::Error;

#[allow(unused_imports)] // used in docs
use crate::CircularList;

/// Errors returned by the fallible [`CircularList`] operations. The list is
/// never modified by a call that returns one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation needs at least one element, but the list is empty.
    #[error("can't operate on an empty list")]
    EmptyCollection,
    /// The index is not within `0..len`.
    #[error("index {index} is out of bounds for a list of length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },
    /// The list is full and already at its maximum capacity.
    #[error("can't add more elements, the list is at its maximum capacity of {max_capacity}")]
    CapacityExceeded {
        /// The hard ceiling of the list's capacity.
        max_capacity: usize,
    },
}

/// Returned by [`CircularList::push_back`] when the list is full and can't
/// grow anymore. Contains the value that could not be added.
///
/// Converts into [`ListError::CapacityExceeded`] for use with `?`, dropping
/// the value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded<T> {
    /// The element that was rejected.
    pub value: T,
    /// The maximum capacity of the list that rejected the element.
    pub max_capacity: usize,
}

impl<T> CapacityExceeded<T> {
    /// Gives back the rejected element.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for CapacityExceeded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "can't add more elements, the list is at its maximum capacity of {}",
            self.max_capacity,
        )
    }
}

// Not derived, so that `T` doesn't need to be `Debug` for `unwrap` to work.
impl<T> fmt::Debug for CapacityExceeded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityExceeded")
            .field("max_capacity", &self.max_capacity)
            .finish_non_exhaustive()
    }
}

impl<T> std::error::Error for CapacityExceeded<T> {}

impl<T> From<CapacityExceeded<T>> for ListError {
    fn from(err: CapacityExceeded<T>) -> Self {
        ListError::CapacityExceeded {
            max_capacity: err.max_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CapacityExceeded, ListError};

    #[test]
    fn capacity_exceeded_converts_without_the_value() {
        struct NotDebug;
        let err = CapacityExceeded {
            value: NotDebug,
            max_capacity: 3,
        };
        assert_eq!(
            "CapacityExceeded { max_capacity: 3, .. }",
            format!("{err:?}"),
        );
        assert_eq!(
            ListError::CapacityExceeded { max_capacity: 3 },
            ListError::from(err),
        );
    }

    #[test]
    fn messages_mention_the_offending_numbers() {
        let err = ListError::IndexOutOfRange { index: 7, len: 2 };
        assert_eq!(
            "index 7 is out of bounds for a list of length 2",
            err.to_string(),
        );
    }
}
