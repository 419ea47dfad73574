//! Error types for the monitor layer.

use crate::network::ProbeError;
use thiserror::Error;

/// Error type for monitor operations.
///
/// Notification failures are not errors here; they are reported in the
/// cycle report and never stop the loop.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Failed to probe the host's addresses.
    #[error("Failed to probe addresses: {0}")]
    Probe(#[from] ProbeError),
}
