//! Tests for the run module.

use super::*;
use ipnotify::config::Cli;
use ipnotify::network::ProbeError;
use ipnotify::network::filter::AddressFilter;

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["ipnotify"];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn monitor_error_is_transparent() {
        let error = RunError::from(MonitorError::Probe(ProbeError::NotFound {
            program: "ifconfig".to_string(),
        }));

        assert!(error.to_string().starts_with("Failed to probe addresses"));
        assert!(error.to_string().contains("ifconfig"));
    }
}

mod create_prober {
    use super::*;

    #[test]
    fn probes_configured_interface() {
        let prober = create_prober(&config(&["--interface", "enp2s0"]));

        assert_eq!(prober.inner().primary().interface().as_str(), "enp2s0");
    }

    #[test]
    fn hostname_lookup_enabled_by_default() {
        let prober = create_prober(&config(&[]));

        assert!(prober.inner().secondary().is_some());
    }

    #[test]
    fn hostname_lookup_can_be_disabled() {
        let mut config = config(&[]);
        config.hostname_lookup = false;

        let prober = create_prober(&config);

        assert!(prober.inner().secondary().is_none());
    }

    #[test]
    fn filters_reserved_prefixes() {
        let prober = create_prober(&config(&[]));

        assert!(!prober.filter().matches("192.168.1.10"));
        assert!(!prober.filter().matches("127.0.0.1"));
        assert!(!prober.filter().matches("fe80::1"));
        assert!(prober.filter().matches("203.0.113.7"));
    }
}

mod create_notifier {
    use super::*;

    #[test]
    fn dry_run_selects_log_only_notifier() {
        let notifier = create_notifier(&config(&["--dry-run"]));
        assert!(matches!(notifier, AppNotifier::DryRun(_)));
    }

    #[test]
    fn defaults_to_smtp() {
        let notifier = create_notifier(&config(&[]));
        assert!(matches!(notifier, AppNotifier::Smtp(_)));
    }

    #[tokio::test]
    async fn dry_run_reports_sent() {
        let notifier = create_notifier(&config(&["--dry-run"]));
        let addresses: AddressSet = ["203.0.113.7"].into_iter().collect();

        assert_eq!(notifier.notify(&addresses).await, NotifyOutcome::Sent);
    }

    #[tokio::test]
    async fn unconfigured_smtp_reports_failure() {
        let notifier = create_notifier(&config(&[]));
        let addresses: AddressSet = ["203.0.113.7"].into_iter().collect();

        assert!(!notifier.notify(&addresses).await.is_sent());
    }

    #[test]
    fn body_context_carries_interface() {
        let context = body_context(&config(&["--interface", "eth3"]));

        assert_eq!(context.interface, "eth3");
    }
}
