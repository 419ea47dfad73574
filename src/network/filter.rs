//! Address filtering and prober composition.
//!
//! # Design
//!
//! - **Pure Matcher**: [`AddressFilter`] only answers "keep this literal?".
//! - **Prefix Exclusion**: [`PrefixFilter`] drops literals starting with any
//!   configured prefix. The default set is the narrow heuristic
//!   `192.168.`, `127.0.`, `fe80:`; it is not a CIDR classifier.
//! - **Decorators**: [`FilteredProber`] applies a filter to any
//!   [`AddressProber`]; [`UnionProber`] merges a primary probe with a
//!   best-effort secondary one.

use super::{AddressProber, AddressSet, ProbeError};

/// Private-range prefix excluded by default.
pub const PRIVATE_PREFIX: &str = "192.168.";
/// Loopback prefix excluded by default.
pub const LOOPBACK_PREFIX: &str = "127.0.";
/// IPv6 link-local prefix excluded by default.
pub const LINK_LOCAL_PREFIX: &str = "fe80:";

/// Trait for filtering address literals.
///
/// # Thread Safety
///
/// Filters must be `Send + Sync` to support use from async contexts.
pub trait AddressFilter: Send + Sync {
    /// Returns `true` if the address should be kept, `false` to drop it.
    fn matches(&self, address: &str) -> bool;

    /// Applies the filter to a whole set. Surviving literals are unchanged.
    fn apply(&self, addresses: AddressSet) -> AddressSet {
        addresses.retain(|a| self.matches(a))
    }
}

/// Drops literals that begin with any of the configured prefixes.
///
/// # Examples
///
/// ```
/// use ipnotify::network::filter::{AddressFilter, PrefixFilter};
///
/// let filter = PrefixFilter::default();
///
/// assert!(filter.matches("203.0.113.7"));
/// assert!(!filter.matches("192.168.1.20"));
/// assert!(!filter.matches("127.0.0.1"));
/// assert!(!filter.matches("fe80::1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFilter {
    prefixes: Vec<String>,
}

impl PrefixFilter {
    /// Creates a filter excluding the given prefixes.
    #[must_use]
    pub fn new<S: Into<String>>(prefixes: impl IntoIterator<Item = S>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the excluded prefixes.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for PrefixFilter {
    fn default() -> Self {
        Self::new([PRIVATE_PREFIX, LOOPBACK_PREFIX, LINK_LOCAL_PREFIX])
    }
}

impl AddressFilter for PrefixFilter {
    fn matches(&self, address: &str) -> bool {
        !self.prefixes.iter().any(|p| address.starts_with(p.as_str()))
    }
}

/// Removes private, loopback and link-local literals using the default
/// [`PrefixFilter`].
#[must_use]
pub fn filter_addresses(addresses: AddressSet) -> AddressSet {
    PrefixFilter::default().apply(addresses)
}

/// A prober decorator that applies a filter to results.
///
/// # Type Parameters
///
/// - `P`: The inner prober type (implements [`AddressProber`])
/// - `F`: The filter type (implements [`AddressFilter`])
#[derive(Debug, Clone)]
pub struct FilteredProber<P, F> {
    inner: P,
    filter: F,
}

impl<P, F> FilteredProber<P, F> {
    /// Creates a new filtered prober.
    #[must_use]
    pub const fn new(inner: P, filter: F) -> Self {
        Self { inner, filter }
    }

    /// Returns a reference to the inner prober.
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Returns a reference to the filter.
    pub const fn filter(&self) -> &F {
        &self.filter
    }
}

impl<P: AddressProber, F: AddressFilter> AddressProber for FilteredProber<P, F> {
    fn probe(&self) -> Result<AddressSet, ProbeError> {
        let raw = self.inner.probe()?;
        let before = raw.len();
        let kept = self.filter.apply(raw);
        if kept.len() < before {
            tracing::debug!("Filtered out {} address(es)", before - kept.len());
        }
        Ok(kept)
    }
}

/// Unions a primary probe with an optional secondary one.
///
/// Errors from the primary prober propagate. The secondary prober is
/// best-effort: its errors are logged and contribute nothing, so a failed
/// hostname lookup never hides the interface probe's result.
#[derive(Debug, Clone)]
pub struct UnionProber<P, S> {
    primary: P,
    secondary: Option<S>,
}

impl<P, S> UnionProber<P, S> {
    /// Creates a union of `primary` and `secondary`.
    #[must_use]
    pub const fn new(primary: P, secondary: Option<S>) -> Self {
        Self { primary, secondary }
    }

    /// Returns the primary prober.
    #[must_use]
    pub const fn primary(&self) -> &P {
        &self.primary
    }

    /// Returns the secondary prober, if configured.
    #[must_use]
    pub const fn secondary(&self) -> Option<&S> {
        self.secondary.as_ref()
    }
}

impl<P: AddressProber, S: AddressProber> AddressProber for UnionProber<P, S> {
    fn probe(&self) -> Result<AddressSet, ProbeError> {
        let primary = self.primary.probe()?;
        let Some(secondary) = &self.secondary else {
            return Ok(primary);
        };

        match secondary.probe() {
            Ok(extra) => Ok(primary.union(extra)),
            Err(e) => {
                tracing::warn!("Supplementary probe failed: {e}");
                Ok(primary)
            }
        }
    }
}

impl<T: AddressFilter + ?Sized> AddressFilter for &T {
    fn matches(&self, address: &str) -> bool {
        (*self).matches(address)
    }
}

impl AddressFilter for Box<dyn AddressFilter> {
    fn matches(&self, address: &str) -> bool {
        self.as_ref().matches(address)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
