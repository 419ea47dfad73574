//! Monitor layer for detecting address changes and triggering notifications.
//!
//! This module provides types and functions for:
//! - Detecting changes between address sets ([`detect`], [`Detection`])
//! - Holding the last-seen set ([`Baseline`])
//! - Driving the probe-detect-notify cycle ([`NotifierTrigger`])
//! - Error handling ([`MonitorError`])

mod baseline;
mod change;
mod error;
mod trigger;

pub use baseline::Baseline;
pub use change::{AddressDiff, Detection, detect};
pub use error::MonitorError;
pub use trigger::{CycleKind, CycleReport, NotifierTrigger};
