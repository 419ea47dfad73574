//! Application execution logic.
//!
//! This module wires the prober, notifier and trigger together and runs
//! the notification loop until a shutdown signal or a probe failure.

use thiserror::Error;
use tokio::signal;

use ipnotify::config::ValidatedConfig;
use ipnotify::monitor::{MonitorError, NotifierTrigger};
use ipnotify::network::AddressSet;
use ipnotify::network::filter::{FilteredProber, PrefixFilter, UnionProber};
use ipnotify::network::hostname::{HostResolver, HostnameProber, SystemResolver};
use ipnotify::network::platform::PlatformProber;
use ipnotify::notify::{
    BodyContext, BodyRenderer, DryRunNotifier, Notifier, NotifyOutcome, SmtpNotifier,
};

/// Type alias for the application's filtered prober.
type AppProber = FilteredProber<UnionProber<PlatformProber, HostnameProber>, PrefixFilter>;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The monitor loop stopped on an error.
    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

/// The notifier selected by configuration.
#[derive(Debug)]
enum AppNotifier {
    Smtp(SmtpNotifier),
    DryRun(DryRunNotifier),
}

impl Notifier for AppNotifier {
    async fn notify(&self, addresses: &AddressSet) -> NotifyOutcome {
        match self {
            Self::Smtp(notifier) => notifier.notify(addresses).await,
            Self::DryRun(notifier) => notifier.notify(addresses).await,
        }
    }
}

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the prober (interface utility, optional hostname lookup, filter)
/// 2. Creates the notifier (SMTPS, or log-only in dry-run mode)
/// 3. Runs the startup cycle, which always notifies
/// 4. Runs the regular cycles until shutdown signal (Ctrl+C / SIGTERM)
///
/// # Errors
///
/// Returns an error if probing fails; notification failures never stop the loop.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires:
/// - The interface-status utility
/// - Real async runtime with signal handling
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    if config.created_config {
        tracing::warn!(
            "Created {} from template; fill in the [SMTP] section to receive mail",
            config.config_path.display()
        );
    }
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - notifications will be logged but not sent");
    }

    let prober = create_prober(&config);
    let notifier = create_notifier(&config);
    let mut trigger = NotifierTrigger::new(prober, notifier, config.interval);

    tracing::info!(
        "Probing {} every {}s",
        config.interface,
        config.interval.as_secs()
    );

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    tokio::select! {
        biased;

        () = &mut shutdown => {
            tracing::info!("Shutdown signal received, stopping...");
            return Ok(());
        }

        report = trigger.start() => println!("{}", report?),
    }

    tokio::select! {
        biased;

        () = &mut shutdown => {
            tracing::info!("Shutdown signal received, stopping...");
            Ok(())
        }

        result = trigger.run_forever(|report| println!("{report}")) => {
            let Err(e) = result;
            Err(e.into())
        }
    }
}

/// Creates the filtered prober from configuration.
fn create_prober(config: &ValidatedConfig) -> AppProber {
    let platform = PlatformProber::new(config.interface.clone(), config.ip_version);
    let hostname = config
        .hostname_lookup
        .then(|| HostnameProber::new(config.ip_version));

    FilteredProber::new(UnionProber::new(platform, hostname), PrefixFilter::default())
}

/// Creates the notifier from configuration.
fn create_notifier(config: &ValidatedConfig) -> AppNotifier {
    if config.dry_run {
        return AppNotifier::DryRun(DryRunNotifier);
    }

    AppNotifier::Smtp(SmtpNotifier::new(
        config.mail.clone(),
        BodyRenderer::new(config.body_template.clone()),
        body_context(config),
    ))
}

fn body_context(config: &ValidatedConfig) -> BodyContext {
    BodyContext {
        interface: config.interface.to_string(),
        hostname: SystemResolver.hostname(),
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
