//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Default network interface to probe.
pub const INTERFACE: &str = "wlan0";

/// Default delay between cycles in seconds (one hour).
pub const INTERVAL_SECS: u64 = 3600;

/// Hostname resolution is merged into the probed set by default.
pub const HOSTNAME_LOOKUP: bool = true;

/// Default delay between cycles as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_secs(INTERVAL_SECS)
}
