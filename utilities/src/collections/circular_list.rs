// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod iter;

use core::{
    fmt::Debug,
    mem::{needs_drop, transmute, MaybeUninit},
    ops::{Index, IndexMut},
};

use tracing::{debug, trace};

use crate::error::{CapacityExceeded, ListError};

use super::CapacityPolicy;

pub use iter::Iter;

/// Picks the removal strategy for [`CircularList::remove_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOrder {
    /// Shift every element after the removed one back by one. O(n).
    Preserve,
    /// Move the last element into the gap. O(1), but the relative order of
    /// the remaining elements is not kept.
    Unordered,
}

/// A growable list stored in a ring of slots.
///
/// Pushing to the back is amortized O(1), and removing from either end is
/// O(1) without moving any elements. When the list is full, it grows by the
/// [`CapacityPolicy::growth_increment`], up to the
/// [`CapacityPolicy::max_capacity`], after which pushes fail with
/// [`CapacityExceeded`].
///
/// Logical index `i` lives in the slot `(head + i) % capacity`. Growing moves
/// the elements into a new allocation in logical order, so that `head` starts
/// over from 0.
pub struct CircularList<T> {
    /// Backing memory. Invariant: the `len` slots starting from `head`
    /// (possibly wrapping around the end of the slice) are initialized, and
    /// the rest are uninitialized.
    slots: Box<[MaybeUninit<T>]>,
    head: usize,
    len: usize,
    policy: CapacityPolicy,
}

impl<T> CircularList<T> {
    /// Creates an empty, unbounded list without allocating.
    pub fn new() -> CircularList<T> {
        CircularList::with_policy(CapacityPolicy::default())
    }

    /// Creates an empty, unbounded list with space for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> CircularList<T> {
        CircularList::with_policy(CapacityPolicy::unbounded(capacity))
    }

    /// Creates an empty list which allocates, grows and stops growing as
    /// specified by the policy.
    pub fn with_policy(policy: CapacityPolicy) -> CircularList<T> {
        CircularList {
            slots: uninit_slots(policy.effective_initial_capacity()),
            head: 0,
            len: 0,
            policy,
        }
    }

    /// Appends the value to the back of the list, growing the backing memory
    /// if it's full. If the list is already at its maximum capacity, returns
    /// the value back inside the error, and the list is not modified.
    pub fn push_back(&mut self, value: T) -> Result<(), CapacityExceeded<T>> {
        if self.len == self.slots.len() && !self.grow() {
            trace!(
                "Refusing to push into a full list at its max capacity ({}).",
                self.policy.max_capacity,
            );
            return Err(CapacityExceeded {
                value,
                max_capacity: self.policy.max_capacity,
            });
        }

        // There's at least one free slot now, so this won't wrap onto the
        // initialized slots at the start of the list.
        let i = self.slot_index(self.len);

        // The slot at `i` is uninitialized due to the invariant explained in
        // the documentation of `self.slots`, so writing over it does not leak.
        self.slots[i].write(value);
        self.len += 1;

        Ok(())
    }

    /// Moves the elements into a larger allocation, starting from slot 0.
    /// Returns false if the policy doesn't allow growing any further.
    fn grow(&mut self) -> bool {
        let old_capacity = self.slots.len();
        let Some(new_capacity) = self.policy.next_capacity(old_capacity) else {
            return false;
        };

        let mut new_slots = uninit_slots(new_capacity);
        for (logical_index, new_slot) in new_slots.iter_mut().take(self.len).enumerate() {
            let old_index = self.slot_index(logical_index);
            // Safety: `logical_index < self.len`, so the old slot is
            // initialized. Each old slot is read exactly once, and the old
            // slots are released below as plain `MaybeUninit`s, which don't
            // drop their contents, so there's no double-drop.
            new_slot.write(unsafe { self.slots[old_index].assume_init_read() });
        }
        self.slots = new_slots;
        self.head = 0;

        debug!(
            "Grew a list of {} elements from {old_capacity} to {new_capacity} slots.",
            self.len,
        );
        true
    }

    /// Returns a reference to the element at the index.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        let i = self.slot_index(index);
        // Safety: `index < self.len`, so the slot is initialized.
        Ok(unsafe { self.slots[i].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at the index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_index(index)?;
        let i = self.slot_index(index);
        // Safety: `index < self.len`, so the slot is initialized.
        Ok(unsafe { self.slots[i].assume_init_mut() })
    }

    /// Replaces the element at the index, dropping the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Returns the element at index 0.
    pub fn first(&self) -> Result<&T, ListError> {
        self.check_not_empty()?;
        self.get(0)
    }

    /// Returns the element at index 0 mutably.
    pub fn first_mut(&mut self) -> Result<&mut T, ListError> {
        self.check_not_empty()?;
        self.get_mut(0)
    }

    /// Returns the element at index `len - 1`.
    pub fn last(&self) -> Result<&T, ListError> {
        self.check_not_empty()?;
        self.get(self.len - 1)
    }

    /// Returns the element at index `len - 1` mutably.
    pub fn last_mut(&mut self) -> Result<&mut T, ListError> {
        self.check_not_empty()?;
        self.get_mut(self.len - 1)
    }

    /// Removes and returns the element at index 0. The rest of the elements
    /// are not moved, their indices just decrease by one.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        self.check_not_empty()?;

        // Safety: the list is not empty, so the slot at `self.head` is
        // initialized. Reading it twice is avoided by moving `self.head` past
        // it right after.
        let value = unsafe { self.slots[self.head].assume_init_read() };
        self.head = self.slot_index(1);
        self.len -= 1;

        Ok(value)
    }

    /// Removes and returns the element at index `len - 1`.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        self.check_not_empty()?;

        let i = self.slot_index(self.len - 1);
        // Safety: `self.len - 1 < self.len`, so the slot is initialized.
        // Reading it twice is avoided by shortening the list right after.
        let value = unsafe { self.slots[i].assume_init_read() };
        self.len -= 1;

        Ok(value)
    }

    /// Removes and returns the element at the index.
    ///
    /// Removing the first or last element is O(1) regardless of `order`. For
    /// other indices, [`RemovalOrder::Unordered`] moves the last element into
    /// the gap, and [`RemovalOrder::Preserve`] shifts every element after the
    /// index back by one.
    pub fn remove_at(&mut self, index: usize, order: RemovalOrder) -> Result<T, ListError> {
        self.check_not_empty()?;
        self.check_index(index)?;

        let last_index = self.len - 1;
        if index == last_index {
            return self.remove_last();
        } else if index == 0 {
            return self.remove_first();
        }

        let removed_slot = self.slot_index(index);
        // Safety: `index < self.len`, so the slot is initialized. The slot is
        // treated as uninitialized from here on: it's swapped to the end of
        // the list, which is then shortened by one to exclude it.
        let value = unsafe { self.slots[removed_slot].assume_init_read() };

        match order {
            RemovalOrder::Unordered => {
                let last_slot = self.slot_index(last_index);
                self.slots.swap(removed_slot, last_slot);
            }
            RemovalOrder::Preserve => {
                for i in index..last_index {
                    let (hole, next) = (self.slot_index(i), self.slot_index(i + 1));
                    self.slots.swap(hole, next);
                }
            }
        }
        self.len -= 1;

        Ok(value)
    }

    /// Drops every element. The backing memory is kept for reuse.
    pub fn clear(&mut self) {
        let (head, len) = (self.head, self.len);
        // Emptied first: if a destructor panics, the rest are leaked instead
        // of being dropped again later.
        self.head = 0;
        self.len = 0;

        if needs_drop::<T>() {
            for logical_index in 0..len {
                let i = wrap_index(head, logical_index, self.slots.len());
                // Safety: the slots `head..head + len` (wrapping) were
                // initialized, and each is dropped once.
                unsafe { self.slots[i].assume_init_drop() };
            }
        }

        trace!("Cleared {len} elements from a list of {} slots.", self.slots.len());
    }

    /// The amount of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The amount of elements the list can hold without growing.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The amount of elements the list is allowed to grow to hold.
    pub fn max_capacity(&self) -> usize {
        self.policy.max_capacity
    }

    /// Returns `true` if the next [`CircularList::push_back`] would fail.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len() && self.policy.next_capacity(self.slots.len()).is_none()
    }

    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Returns the elements as two slices, which form the whole list in order
    /// when concatenated. The second one is empty unless the elements wrap
    /// around the end of the backing memory.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let head_len = self.len.min(self.slots.len() - self.head);
        let head = &self.slots[self.head..self.head + head_len];
        let tail = &self.slots[..self.len - head_len];
        // Safety: the above indices are included in the span of initialized
        // slots, and transmuting a fully initialized `&[MaybeUninit<T>]` to
        // `&[T]` is safe.
        unsafe {
            (
                transmute::<&[MaybeUninit<T>], &[T]>(head),
                transmute::<&[MaybeUninit<T>], &[T]>(tail),
            )
        }
    }

    /// Iterates through the elements from index 0 to `len - 1`.
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.as_slices();
        Iter::new(head, tail)
    }

    fn slot_index(&self, logical_index: usize) -> usize {
        wrap_index(self.head, logical_index, self.slots.len())
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn check_not_empty(&self) -> Result<(), ListError> {
        if self.len == 0 {
            Err(ListError::EmptyCollection)
        } else {
            Ok(())
        }
    }
}

/// `(head + offset) % capacity`, without overflowing. Expects `head <
/// capacity` and `offset <= capacity`.
fn wrap_index(head: usize, offset: usize, capacity: usize) -> usize {
    debug_assert!(head < capacity || capacity == 0);
    debug_assert!(offset <= capacity);
    let until_end = capacity - head;
    if offset < until_end {
        head + offset
    } else {
        offset - until_end
    }
}

fn uninit_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    (0..capacity).map(|_| MaybeUninit::uninit()).collect()
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        CircularList::new()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<usize> for CircularList<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for CircularList<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = CircularList::with_capacity(iter.size_hint().0);
        for value in iter {
            if list.push_back(value).is_err() {
                // An unbounded list only stops growing at usize::MAX slots.
                panic!("capacity overflow");
            }
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
