//! Notification layer for reporting address changes by email.
//!
//! This module provides types and traits for:
//! - The notification seam ([`Notifier`]) and its typed result ([`NotifyOutcome`])
//! - SMTPS delivery ([`SmtpNotifier`], [`MailSettings`])
//! - Message body rendering ([`BodyRenderer`])
//! - A log-only stand-in for dry runs ([`DryRunNotifier`])
//! - Error handling ([`NotifyError`])

mod body;
mod error;
mod sender;
mod smtp;

pub use body::{BodyContext, BodyRenderer};
pub use error::NotifyError;
pub use sender::{DryRunNotifier, Notifier, NotifyOutcome};
pub use smtp::{MailSettings, SmtpNotifier};
