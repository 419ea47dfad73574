//! Tests for platform selection and command-based probing.

use super::*;
use std::sync::Mutex;

/// Runner that records invocations and replays a canned result.
struct MockRunner {
    result: Mutex<Option<Result<CommandOutput, ProbeError>>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockRunner {
    fn returning(result: Result<CommandOutput, ProbeError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ProbeError> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(CommandOutput::success("")))
    }
}

fn wlan0() -> InterfaceName {
    InterfaceName::new("wlan0")
}

mod platform {
    use super::*;

    #[test]
    fn known_operating_systems_map_to_platforms() {
        assert_eq!(Platform::from_os("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os("windows").unwrap(), Platform::Windows);
    }

    #[test]
    fn other_operating_systems_are_rejected() {
        let result = Platform::from_os("freebsd");
        assert!(matches!(
            result,
            Err(ProbeError::UnsupportedPlatform { ref os }) if os == "freebsd"
        ));
    }

    #[test]
    fn linux_queries_named_interface() {
        let (program, args) = Platform::Linux.command(&wlan0());
        assert_eq!(program, "ifconfig");
        assert_eq!(args, vec!["wlan0".to_string()]);
    }

    #[test]
    fn windows_queries_all_adapters() {
        let (program, args) = Platform::Windows.command(&wlan0());
        assert_eq!(program, "ipconfig");
        assert!(args.is_empty());
    }
}

mod platform_prober {
    use super::*;

    #[test]
    fn linux_output_is_parsed_with_ifconfig_parser() {
        let runner = MockRunner::returning(Ok(CommandOutput::success(
            "wlan0: flags=... inet 203.0.113.7 netmask 255.255.255.0 ...",
        )));
        let prober = PlatformProber::with_runner(runner, wlan0(), IpVersion::Both).with_os("linux");

        let set = prober.probe().unwrap();

        assert_eq!(set, ["203.0.113.7"].into_iter().collect());
        assert_eq!(
            prober.runner.calls(),
            vec![("ifconfig".to_string(), vec!["wlan0".to_string()])]
        );
    }

    #[test]
    fn windows_output_is_parsed_with_ipconfig_parser() {
        let runner = MockRunner::returning(Ok(CommandOutput::success(
            "   IPv4 Address. . . . . . . . . . . : 198.51.100.4\n",
        )));
        let prober =
            PlatformProber::with_runner(runner, wlan0(), IpVersion::Both).with_os("windows");

        assert_eq!(prober.probe().unwrap(), ["198.51.100.4"].into_iter().collect());
    }

    #[test]
    fn non_zero_exit_surfaces_stderr_verbatim() {
        let runner = MockRunner::returning(Ok(CommandOutput::failure(
            1,
            "error fetching interface information: Device not found",
        )));
        let prober = PlatformProber::with_runner(runner, InterfaceName::new("eth9"), IpVersion::Both)
            .with_os("linux");

        match prober.probe() {
            Err(ProbeError::CommandFailed {
                command,
                status,
                stderr,
            }) => {
                assert_eq!(command, "ifconfig eth9");
                assert_eq!(status, Some(1));
                assert_eq!(stderr, "error fetching interface information: Device not found");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_utility_is_an_error_not_an_empty_set() {
        let runner = MockRunner::returning(Err(ProbeError::NotFound {
            program: "ifconfig".to_string(),
        }));
        let prober = PlatformProber::with_runner(runner, wlan0(), IpVersion::Both).with_os("linux");

        assert!(matches!(prober.probe(), Err(ProbeError::NotFound { .. })));
    }

    #[test]
    fn unsupported_os_fails_before_running_anything() {
        let runner = MockRunner::returning(Ok(CommandOutput::success("inet 203.0.113.7")));
        let prober = PlatformProber::with_runner(runner, wlan0(), IpVersion::Both).with_os("macos");

        assert!(matches!(
            prober.probe(),
            Err(ProbeError::UnsupportedPlatform { .. })
        ));
        assert!(prober.runner.calls().is_empty());
    }

    #[test]
    fn interface_without_address_is_a_successful_empty_probe() {
        let runner = MockRunner::returning(Ok(CommandOutput::success(
            "wlan0: flags=4099<UP,BROADCAST,MULTICAST>  mtu 1500\n",
        )));
        let prober = PlatformProber::with_runner(runner, wlan0(), IpVersion::Both).with_os("linux");

        assert!(prober.probe().unwrap().is_empty());
    }
}
