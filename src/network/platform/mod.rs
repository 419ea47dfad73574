//! Platform-specific interface probing.
//!
//! The interface-status utility and the shape of its output differ per
//! operating system. [`Platform`] pairs each supported OS with its command
//! and [`OutputParser`]; [`PlatformProber`] picks the platform at call time
//! from the runtime OS identity.
//!
//! # Platform Support
//!
//! - **Linux**: `ifconfig <interface>`, parsed by [`IfconfigParser`].
//! - **Windows**: `ipconfig`, parsed by [`IpconfigParser`]. The interface
//!   name is not passed; every adapter's labeled lines are collected.
//! - Anything else fails with [`ProbeError::UnsupportedPlatform`].

mod command;

pub use command::{CommandOutput, CommandRunner, SystemRunner};

use super::parse::{IfconfigParser, IpconfigParser, OutputParser};
use super::{AddressProber, AddressSet, InterfaceName, IpVersion, ProbeError};

/// An operating system family with a known probing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux, probed with `ifconfig`.
    Linux,
    /// Windows, probed with `ipconfig`.
    Windows,
}

impl Platform {
    /// Maps an OS identifier (as in [`std::env::consts::OS`]) to a platform.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::UnsupportedPlatform`] for unknown identifiers.
    pub fn from_os(os: &str) -> Result<Self, ProbeError> {
        match os {
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            other => Err(ProbeError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Program and arguments that report the addresses of `interface`.
    #[must_use]
    pub fn command(self, interface: &InterfaceName) -> (&'static str, Vec<String>) {
        match self {
            Self::Linux => ("ifconfig", vec![interface.as_str().to_string()]),
            Self::Windows => ("ipconfig", Vec::new()),
        }
    }

    /// Parser for this platform's utility output.
    #[must_use]
    pub fn parser(self) -> &'static dyn OutputParser {
        match self {
            Self::Linux => &IfconfigParser,
            Self::Windows => &IpconfigParser,
        }
    }
}

/// Probes one interface through the platform's interface-status utility.
///
/// # Example
///
/// ```no_run
/// use ipnotify::network::{AddressProber, InterfaceName, IpVersion};
/// use ipnotify::network::platform::PlatformProber;
///
/// let prober = PlatformProber::new(InterfaceName::new("wlan0"), IpVersion::Both);
/// let addresses = prober.probe().expect("probe failed");
/// println!("{addresses}");
/// ```
#[derive(Debug, Clone)]
pub struct PlatformProber<R = SystemRunner> {
    runner: R,
    interface: InterfaceName,
    version: IpVersion,
    os: String,
}

impl PlatformProber<SystemRunner> {
    /// Creates a prober for `interface` that runs the real utility.
    #[must_use]
    pub fn new(interface: InterfaceName, version: IpVersion) -> Self {
        Self::with_runner(SystemRunner, interface, version)
    }
}

impl<R: CommandRunner> PlatformProber<R> {
    /// Creates a prober with a custom command runner.
    #[must_use]
    pub fn with_runner(runner: R, interface: InterfaceName, version: IpVersion) -> Self {
        Self {
            runner,
            interface,
            version,
            os: std::env::consts::OS.to_string(),
        }
    }

    /// Overrides the OS identity used to choose the platform.
    #[must_use]
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    /// Returns the probed interface.
    #[must_use]
    pub const fn interface(&self) -> &InterfaceName {
        &self.interface
    }
}

impl<R: CommandRunner> AddressProber for PlatformProber<R> {
    fn probe(&self) -> Result<AddressSet, ProbeError> {
        let platform = Platform::from_os(&self.os)?;
        let (program, args) = platform.command(&self.interface);
        let command_line = std::iter::once(program)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!("Running `{command_line}`");
        let output = self.runner.run(program, &args)?;

        if !output.success {
            return Err(ProbeError::CommandFailed {
                command: command_line,
                status: output.status,
                stderr: output.stderr,
            });
        }

        let addresses = platform.parser().parse(&output.stdout, self.version);
        tracing::debug!("{program} reported {addresses} on {}", self.interface);
        Ok(addresses)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
