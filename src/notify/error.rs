//! Error types for notification delivery.

use thiserror::Error;

/// Error type for a single notification attempt.
///
/// These never escape a [`Notifier`](super::Notifier); they are folded
/// into [`NotifyOutcome::Failed`](super::NotifyOutcome::Failed) so the
/// caller picks the policy.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A required mail setting is absent from the configuration.
    #[error("Mail setting {0} is not configured")]
    MissingSetting(&'static str),

    /// A configured mailbox is not a valid email address.
    #[error("Invalid email address '{address}': {source}")]
    InvalidAddress {
        /// The offending address text.
        address: String,
        /// Underlying parse error.
        #[source]
        source: lettre::address::AddressError,
    },

    /// The body template failed to render.
    #[error("Failed to render body template: {0}")]
    Template(String),

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connecting, authenticating or sending over SMTP failed.
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
