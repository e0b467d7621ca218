// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod capacity_policy;
mod circular_list;

pub use capacity_policy::{CapacityPolicy, DEFAULT_GROWTH_INCREMENT};
pub use circular_list::{CircularList, Iter, RemovalOrder};
