// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use utilities::CapacityPolicy;

/// A replay script: the capacity policy of the list, and the operations to
/// run on it, in order.
///
/// Has enum variants for breaking changes in the format of the script file,
/// but [`read`] always returns the newest variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "script_version", rename_all = "snake_case")]
pub enum ReplayScript {
    V1 {
        #[serde(default)]
        policy: CapacityPolicy,
        operations: Vec<Operation>,
    },
}

/// One call to make on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Append {
        value: i64,
    },
    Set {
        index: usize,
        value: i64,
    },
    RemoveFirst,
    RemoveLast,
    RemoveAt {
        index: usize,
        #[serde(default)]
        preserve_order: bool,
    },
    Clear,
}

pub fn read(script: &Path) -> anyhow::Result<ReplayScript> {
    let script = fs::read_to_string(script).context("Failed to open the replay script")?;
    parse(&script)
}

pub fn parse(script: &str) -> anyhow::Result<ReplayScript> {
    let script = serde_json::from_str(script).context("Failed to parse the replay script")?;

    // NOTE: When there's new versions of ReplayScript, convert to the newest
    // here (replay assumes it)

    Ok(script)
}
