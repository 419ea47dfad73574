//! Address probing trait and error types.

use std::io;

use super::AddressSet;
use thiserror::Error;

/// Error type for address probing operations.
///
/// An empty [`AddressSet`] is a successful probe of an interface without
/// addresses; every variant here means the probe itself could not be made.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The interface-status utility ran but exited unsuccessfully
    /// (e.g. unknown interface name).
    #[error("Command `{command}` failed with error: {stderr}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Exit code, if the process exited normally.
        status: Option<i32>,
        /// Standard error of the process, verbatim.
        stderr: String,
    },

    /// The interface-status utility is not installed or not on `PATH`.
    #[error("Command `{program}` not found")]
    NotFound {
        /// The program that could not be located.
        program: String,
    },

    /// The utility could not be started for another reason.
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Name resolution of the local hostname failed.
    #[error("Failed to resolve hostname '{host}': {source}")]
    Resolve {
        /// The hostname that was looked up.
        host: String,
        /// Underlying resolver error.
        #[source]
        source: io::Error,
    },

    /// The running operating system has no probing strategy.
    #[error("Unsupported operating system: {os}")]
    UnsupportedPlatform {
        /// Operating system identifier as reported at runtime.
        os: String,
    },
}

/// Trait for producing the current [`AddressSet`] of the host.
///
/// # Design
///
/// - The interface-status utility, hostname resolution, filtering and
///   unions are all expressed as implementations or decorators of this trait
/// - Enables dependency injection for testing with mock implementations
///
/// # Example
///
/// ```ignore
/// use ipnotify::network::{AddressProber, AddressSet, ProbeError};
///
/// struct FixedProber(AddressSet);
///
/// impl AddressProber for FixedProber {
///     fn probe(&self) -> Result<AddressSet, ProbeError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait AddressProber: Send + Sync {
    /// Probes the current address set.
    ///
    /// This is a synchronous operation that may block on an external
    /// process or on name resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the underlying source cannot be queried.
    fn probe(&self) -> Result<AddressSet, ProbeError>;
}

impl<T: AddressProber + ?Sized> AddressProber for &T {
    fn probe(&self) -> Result<AddressSet, ProbeError> {
        (*self).probe()
    }
}

impl AddressProber for Box<dyn AddressProber> {
    fn probe(&self) -> Result<AddressSet, ProbeError> {
        self.as_ref().probe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// A mock prober that returns predefined results.
    ///
    /// Uses `Mutex<VecDeque>` to avoid requiring `Clone` on `ProbeError`.
    struct MockProber {
        results: Mutex<std::collections::VecDeque<Result<AddressSet, ProbeError>>>,
    }

    impl MockProber {
        fn new(results: Vec<Result<AddressSet, ProbeError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
            }
        }
    }

    impl AddressProber for MockProber {
        fn probe(&self) -> Result<AddressSet, ProbeError> {
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(AddressSet::new()))
        }
    }

    #[test]
    fn boxed_prober_delegates() {
        let set: AddressSet = ["203.0.113.7"].into_iter().collect();
        let prober: Box<dyn AddressProber> = Box::new(MockProber::new(vec![Ok(set.clone())]));

        assert_eq!(prober.probe().unwrap(), set);
        assert!(prober.probe().unwrap().is_empty());
    }

    #[test]
    fn command_failed_carries_stderr_verbatim() {
        let error = ProbeError::CommandFailed {
            command: "ifconfig eth9".to_string(),
            status: Some(1),
            stderr: "error fetching interface information: Device not found".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Command `ifconfig eth9` failed with error: \
             error fetching interface information: Device not found"
        );
    }

    #[test]
    fn unsupported_platform_names_os() {
        let error = ProbeError::UnsupportedPlatform {
            os: "macos".to_string(),
        };
        assert!(error.to_string().contains("macos"));
    }
}
