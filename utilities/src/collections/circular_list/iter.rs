// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::{iter::FusedIterator, slice};

#[allow(unused_imports)] // used in docs
use super::CircularList;

/// Iterator over the elements of a [`CircularList`], in index order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    head: slice::Iter<'a, T>,
    tail: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: &'a [T], tail: &'a [T]) -> Iter<'a, T> {
        Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.next().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
