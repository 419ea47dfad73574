//! Change detection between address sets.

use crate::network::AddressSet;

/// Literals added and removed between two address sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDiff {
    /// Present now, absent before.
    pub added: Vec<String>,
    /// Present before, absent now.
    pub removed: Vec<String>,
}

impl AddressDiff {
    /// Returns true if nothing was added or removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Outcome of comparing a fresh probe against the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Whether the fresh set differs from the baseline.
    pub changed: bool,
    /// The freshly probed, filtered set.
    pub current: AddressSet,
    /// What was added or removed relative to the baseline.
    pub diff: AddressDiff,
}

/// Compares the baseline against a freshly probed set.
///
/// This is a pure function. Equality is exact set equality: any added,
/// removed or replaced literal is a change, while a re-probe yielding the
/// same set (in any order) is not. With no baseline every set, including
/// the empty one, counts as a change.
///
/// # Examples
///
/// ```
/// use ipnotify::monitor::detect;
/// use ipnotify::network::AddressSet;
///
/// let old: AddressSet = ["203.0.113.7"].into_iter().collect();
/// let new: AddressSet = ["198.51.100.4"].into_iter().collect();
///
/// assert!(!detect(Some(&old), old.clone()).changed);
/// assert!(detect(Some(&old), new).changed);
/// ```
#[must_use]
pub fn detect(previous: Option<&AddressSet>, current: AddressSet) -> Detection {
    let Some(previous) = previous else {
        let diff = AddressDiff {
            added: current.iter().map(str::to_string).collect(),
            removed: Vec::new(),
        };
        return Detection {
            changed: true,
            current,
            diff,
        };
    };

    let diff = AddressDiff {
        added: current.difference(previous),
        removed: previous.difference(&current),
    };

    Detection {
        changed: *previous != current,
        current,
        diff,
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
