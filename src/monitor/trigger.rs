//! The probe-filter-detect-notify cycle and the loop that drives it.

use std::convert::Infallible;
use std::fmt;
use std::time::Duration;

use super::{AddressDiff, Baseline, MonitorError, detect};
use crate::network::{AddressProber, AddressSet};
use crate::notify::{Notifier, NotifyOutcome};
use crate::time::{Sleeper, TokioSleeper};

/// What a cycle concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKind {
    /// The startup cycle, which always notifies.
    Startup,
    /// The address set differed from the baseline.
    Updated,
    /// The address set matched the baseline.
    Unchanged,
}

/// Summary of one completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// What the cycle concluded.
    pub kind: CycleKind,
    /// The probed, filtered address set.
    pub addresses: AddressSet,
    /// Difference from the previous baseline.
    pub diff: AddressDiff,
    /// Notification outcome, if one was attempted.
    pub notification: Option<NotifyOutcome>,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CycleKind::Startup => write!(f, "ips: {}", self.addresses),
            CycleKind::Updated => write!(f, "ip update to: {}", self.addresses),
            CycleKind::Unchanged => write!(f, "ip not change: {}", self.addresses),
        }
    }
}

/// Drives the cycle on a fixed delay for the lifetime of the process.
///
/// The delay is re-armed only after a cycle has finished (probe and
/// notification included), so intervals drift by the cycle's own duration
/// and two cycles never overlap.
///
/// # Type Parameters
///
/// * `P` - The [`AddressProber`] producing the filtered address set
/// * `N` - The [`Notifier`] receiving changed sets
/// * `S` - The [`Sleeper`] used between cycles (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```ignore
/// let mut trigger = NotifierTrigger::new(prober, notifier, Duration::from_secs(3600));
///
/// println!("{}", trigger.start().await?);
/// trigger.run_forever(|report| println!("{report}")).await?;
/// ```
#[derive(Debug)]
pub struct NotifierTrigger<P, N, S = TokioSleeper> {
    prober: P,
    notifier: N,
    sleeper: S,
    interval: Duration,
    baseline: Baseline,
}

impl<P, N> NotifierTrigger<P, N, TokioSleeper> {
    /// Creates a trigger sleeping on the Tokio timer.
    #[must_use]
    pub const fn new(prober: P, notifier: N, interval: Duration) -> Self {
        Self {
            prober,
            notifier,
            sleeper: TokioSleeper,
            interval,
            baseline: Baseline::new(),
        }
    }
}

impl<P, N, S> NotifierTrigger<P, N, S> {
    /// Sets a custom sleeper for the delay between cycles.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> NotifierTrigger<P, N, S2> {
        NotifierTrigger {
            prober: self.prober,
            notifier: self.notifier,
            sleeper,
            interval: self.interval,
            baseline: self.baseline,
        }
    }

    /// Returns the delay between cycles.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the current baseline.
    #[must_use]
    pub const fn baseline(&self) -> &Baseline {
        &self.baseline
    }
}

impl<P, N, S> NotifierTrigger<P, N, S>
where
    P: AddressProber,
    N: Notifier,
    S: Sleeper,
{
    /// Runs the startup cycle.
    ///
    /// Probes once, notifies unconditionally (proof of life, even when an
    /// earlier run saw the same addresses) and establishes the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Probe`] if probing fails.
    pub async fn start(&mut self) -> Result<CycleReport, MonitorError> {
        let addresses = self.prober.probe()?;
        tracing::info!("Startup addresses: {addresses}");

        let outcome = self.notifier.notify(&addresses).await;
        log_outcome(&outcome);

        let diff = detect(None, addresses.clone()).diff;
        self.baseline.accept(addresses.clone());

        Ok(CycleReport {
            kind: CycleKind::Startup,
            addresses,
            diff,
            notification: Some(outcome),
        })
    }

    /// Runs one probe-filter-detect-notify cycle.
    ///
    /// On change the notifier is called and the baseline is overwritten
    /// whether or not delivery succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Probe`] if probing fails; the baseline is
    /// left untouched.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, MonitorError> {
        let addresses = self.prober.probe()?;
        let detection = detect(self.baseline.current(), addresses);

        if !detection.changed {
            tracing::debug!("No address change");
            return Ok(CycleReport {
                kind: CycleKind::Unchanged,
                addresses: detection.current,
                diff: detection.diff,
                notification: None,
            });
        }

        for address in &detection.diff.added {
            tracing::info!("+ {address}");
        }
        for address in &detection.diff.removed {
            tracing::info!("- {address}");
        }

        let outcome = self.notifier.notify(&detection.current).await;
        log_outcome(&outcome);
        self.baseline.commit(&detection);

        Ok(CycleReport {
            kind: CycleKind::Updated,
            addresses: detection.current,
            diff: detection.diff,
            notification: Some(outcome),
        })
    }

    /// Runs cycles forever: one cycle, then the delay, then the next.
    ///
    /// `on_cycle` sees every completed cycle's report. There is no
    /// cancellation; the loop ends only with the process or a probe error.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Probe`] from the first failed probe.
    pub async fn run_forever<F>(&mut self, mut on_cycle: F) -> Result<Infallible, MonitorError>
    where
        F: FnMut(&CycleReport) + Send,
    {
        loop {
            let report = self.run_cycle().await?;
            on_cycle(&report);
            self.sleeper.sleep(self.interval).await;
        }
    }
}

fn log_outcome(outcome: &NotifyOutcome) {
    match outcome {
        NotifyOutcome::Sent => tracing::debug!("Notification delivered"),
        NotifyOutcome::Failed { reason } => {
            tracing::warn!("Notification not delivered, baseline updated anyway: {reason}");
        }
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
