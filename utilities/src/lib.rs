// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Low-level support utilities for the game.
//!
//! The main resident is [`CircularList`], a growable list backed by a ring of
//! slots, with O(1) removal from both ends and a choice between O(1) unordered
//! and O(n) order-preserving removal from the middle.

pub mod collections;
pub mod error;

pub use collections::{CapacityPolicy, CircularList, RemovalOrder};
pub use error::{CapacityExceeded, ListError};
