//! The last accepted address set.

use super::Detection;
use crate::network::AddressSet;

/// The most recently accepted [`AddressSet`], held for the lifetime of
/// the process and never persisted.
///
/// Owned by the loop that drives the cycles and passed to each one, so
/// there is exactly one reader and writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Baseline {
    current: Option<AddressSet>,
}

impl Baseline {
    /// Creates an empty baseline (nothing accepted yet).
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Returns the accepted set, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&AddressSet> {
        self.current.as_ref()
    }

    /// Returns true once a set has been accepted.
    #[must_use]
    pub const fn is_established(&self) -> bool {
        self.current.is_some()
    }

    /// Unconditionally accepts `addresses` as the new baseline.
    pub fn accept(&mut self, addresses: AddressSet) {
        self.current = Some(addresses);
    }

    /// Overwrites the baseline if `detection` reports a change.
    ///
    /// Returns whether the baseline was overwritten.
    pub fn commit(&mut self, detection: &Detection) -> bool {
        if detection.changed {
            self.accept(detection.current.clone());
        }
        detection.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::detect;

    fn set(addresses: &[&str]) -> AddressSet {
        addresses.iter().copied().collect()
    }

    #[test]
    fn starts_empty() {
        let baseline = Baseline::new();
        assert!(!baseline.is_established());
        assert!(baseline.current().is_none());
    }

    #[test]
    fn commit_overwrites_on_change() {
        let mut baseline = Baseline::new();
        baseline.accept(set(&["203.0.113.7"]));

        let detection = detect(baseline.current(), set(&["198.51.100.4"]));

        assert!(baseline.commit(&detection));
        assert_eq!(baseline.current(), Some(&set(&["198.51.100.4"])));
    }

    #[test]
    fn commit_leaves_baseline_untouched_without_change() {
        let mut baseline = Baseline::new();
        baseline.accept(set(&["203.0.113.7"]));
        let before = baseline.clone();

        let detection = detect(baseline.current(), set(&["203.0.113.7"]));

        assert!(!baseline.commit(&detection));
        assert_eq!(baseline, before);
    }
}
