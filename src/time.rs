//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting an
//! instant or recording sleeper in tests while using the Tokio timer in
//! production.

use std::future::Future;
use std::time::Duration;

/// Abstraction over asynchronous delays.
///
/// # Example
///
/// ```
/// use ipnotify::time::{InstantSleeper, Sleeper};
/// use std::time::Duration;
///
/// # async fn demo() {
/// InstantSleeper.sleep(Duration::from_secs(3600)).await; // returns at once
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Waits for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper using [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately, for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
