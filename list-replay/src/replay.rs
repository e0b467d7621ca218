// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::{debug, info, warn};
use utilities::{CircularList, ListError, RemovalOrder};

use crate::script::{Operation, ReplayScript};

/// The state of the list after a replay.
pub struct ReplayOutcome {
    pub list: CircularList<i64>,
    /// How many operations returned an error. Failed operations don't modify
    /// the list, and the replay continues with the next one.
    pub failures: usize,
}

pub fn replay(script: ReplayScript) -> ReplayOutcome {
    let ReplayScript::V1 { policy, operations } = script;
    debug!("Replaying {} operations with {policy:?}.", operations.len());

    let mut list = CircularList::with_policy(policy);
    let mut failures = 0;
    for (position, operation) in operations.into_iter().enumerate() {
        if let Err(err) = apply(&mut list, operation) {
            warn!("Operation #{position} ({operation:?}) failed: {err}");
            failures += 1;
        }
    }

    info!(
        "Replay finished with {} elements in {} slots, {failures} operations failed.",
        list.len(),
        list.capacity(),
    );
    ReplayOutcome { list, failures }
}

fn apply(list: &mut CircularList<i64>, operation: Operation) -> Result<(), ListError> {
    match operation {
        Operation::Append { value } => list.push_back(value)?,
        Operation::Set { index, value } => list.set(index, value)?,
        Operation::RemoveFirst => {
            let removed = list.remove_first()?;
            debug!("Removed {removed} from the front.");
        }
        Operation::RemoveLast => {
            let removed = list.remove_last()?;
            debug!("Removed {removed} from the back.");
        }
        Operation::RemoveAt {
            index,
            preserve_order,
        } => {
            let order = if preserve_order {
                RemovalOrder::Preserve
            } else {
                RemovalOrder::Unordered
            };
            let removed = list.remove_at(index, order)?;
            debug!("Removed {removed} from index {index}.");
        }
        Operation::Clear => list.clear(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use utilities::CapacityPolicy;

    use super::replay;
    use crate::script::{Operation, ReplayScript};

    fn appends(values: impl IntoIterator<Item = i64>) -> Vec<Operation> {
        values
            .into_iter()
            .map(|value| Operation::Append { value })
            .collect()
    }

    #[test]
    fn failed_operations_are_counted_and_skipped() {
        let mut operations = vec![Operation::RemoveFirst];
        operations.extend(appends([1, 2, 3, 4]));
        operations.push(Operation::Set { index: 7, value: 0 });
        operations.push(Operation::RemoveAt {
            index: 0,
            preserve_order: true,
        });
        operations.extend(appends([5]));

        let outcome = replay(ReplayScript::V1 {
            policy: CapacityPolicy::bounded(0, 3),
            operations,
        });

        // RemoveFirst on empty, Append(4) over max, Set out of range.
        assert_eq!(3, outcome.failures);
        assert_eq!(vec![2, 3, 5], outcome.list.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn removal_order_follows_the_flag() {
        let mut operations = appends([10, 11, 12, 13]);
        operations.push(Operation::RemoveAt {
            index: 1,
            preserve_order: false,
        });
        let outcome = replay(ReplayScript::V1 {
            policy: CapacityPolicy::default(),
            operations: operations.clone(),
        });
        assert_eq!(0, outcome.failures);
        assert_eq!("[10, 13, 12]", format!("{:?}", outcome.list));

        operations.pop();
        operations.push(Operation::RemoveAt {
            index: 1,
            preserve_order: true,
        });
        let outcome = replay(ReplayScript::V1 {
            policy: CapacityPolicy::default(),
            operations,
        });
        assert_eq!("[10, 12, 13]", format!("{:?}", outcome.list));
    }

    #[test]
    fn clear_then_refill() {
        let mut operations = appends(0..15);
        operations.push(Operation::Clear);
        operations.extend(appends([42]));
        let outcome = replay(ReplayScript::V1 {
            policy: CapacityPolicy::default(),
            operations,
        });
        assert_eq!(20, outcome.list.capacity());
        assert_eq!(Ok(&42), outcome.list.first());
    }
}
