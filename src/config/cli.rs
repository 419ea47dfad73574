//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.
//! Every option is optional: running with no flags probes `wlan0` hourly
//! using `config.toml` from the working directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// ipnotify: IP address change notifier
///
/// Periodically probes a network interface for its addresses and mails
/// the new set whenever it changes.
#[derive(Debug, Parser)]
#[command(name = "ipnotify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (created from a template if absent)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Network interface to probe
    #[arg(long)]
    pub interface: Option<String>,

    /// Delay between cycles in seconds
    #[arg(long)]
    pub interval: Option<u64>,

    /// IP version to probe
    #[arg(long = "ip-version", value_enum)]
    pub ip_version: Option<IpVersionArg>,

    /// Test mode - log changes without sending mail
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ipnotify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_PATH)]
        output: PathBuf,
    },
}

/// IP version argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IpVersionArg {
    /// Probe IPv4 addresses only
    #[value(name = "ipv4")]
    V4,
    /// Probe IPv6 addresses only
    #[value(name = "ipv6")]
    V6,
    /// Probe both IPv4 and IPv6 addresses
    #[value(name = "both")]
    Both,
}

impl From<IpVersionArg> for crate::network::IpVersion {
    fn from(arg: IpVersionArg) -> Self {
        match arg {
            IpVersionArg::V4 => Self::V4,
            IpVersionArg::V6 => Self::V6,
            IpVersionArg::Both => Self::Both,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
