//! Notifier trait and typed delivery outcome.

use std::fmt;
use std::future::Future;

use crate::network::AddressSet;

/// Result of one notification attempt.
///
/// Delivery failures are values, not errors: the notifier never decides
/// whether a lost notification should halt the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The notification was handed off successfully.
    Sent,
    /// Delivery failed; no retry was attempted.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

impl NotifyOutcome {
    /// Returns true if the notification was sent.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Creates a failed outcome from any displayable error.
    #[must_use]
    pub fn failed(reason: impl fmt::Display) -> Self {
        Self::Failed {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for NotifyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// Trait for delivering an address set to an external party.
///
/// # Implementation Notes
///
/// Implementations make exactly one attempt and must not panic or
/// propagate errors; every failure is reported as
/// [`NotifyOutcome::Failed`].
pub trait Notifier: Send + Sync {
    /// Sends `addresses` as the host's current address set.
    fn notify(&self, addresses: &AddressSet) -> impl Future<Output = NotifyOutcome> + Send;
}

/// Notifier that only logs what would have been sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunNotifier;

impl Notifier for DryRunNotifier {
    async fn notify(&self, addresses: &AddressSet) -> NotifyOutcome {
        tracing::info!("Dry-run: skipping notification for {addresses}");
        NotifyOutcome::Sent
    }
}
