//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::network::{InterfaceName, IpVersion};
use crate::notify::{BodyRenderer, MailSettings};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to resolve the config file (creating it
/// when absent) and merge it with the CLI, or [`ValidatedConfig::from_raw`]
/// when the TOML has already been parsed.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Interface handed to the interface-status utility
    pub interface: InterfaceName,

    /// Delay between cycles
    pub interval: Duration,

    /// IP version(s) to probe
    pub ip_version: IpVersion,

    /// Merge hostname resolution into the probed set
    pub hostname_lookup: bool,

    /// Mail account and message settings
    pub mail: MailSettings,

    /// Handlebars body template (optional)
    pub body_template: Option<String>,

    /// Dry-run mode (log changes without sending mail)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,

    /// Config file the settings were read from
    pub config_path: PathBuf,

    /// Whether the config file was created from the template on this run
    pub created_config: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ interface: {}, interval: {}s, ip_version: {}, hostname_lookup: {}, \
             smtp_server: {}:{}, dry_run: {}, config: {} }}",
            self.interface,
            self.interval.as_secs(),
            self.ip_version,
            self.hostname_lookup,
            self.mail.server.as_deref().unwrap_or("unset"),
            self.mail.port,
            self.dry_run,
            self.config_path.display(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The interval is zero
    /// - The IP version string is not recognized
    /// - The SMTP port is out of range
    /// - The body template does not compile
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let monitor = toml.map(|t| &t.monitor);
        let smtp = toml.map(|t| &t.smtp);

        let interface = cli
            .interface
            .as_deref()
            .or_else(|| monitor.and_then(|m| m.interface.as_deref()))
            .unwrap_or(defaults::INTERFACE);

        let interval = Self::resolve_interval(cli, toml)?;
        let ip_version = Self::resolve_ip_version(cli, toml)?;

        let hostname_lookup = monitor
            .and_then(|m| m.hostname_lookup)
            .unwrap_or(defaults::HOSTNAME_LOOKUP);

        let mail = Self::build_mail_settings(toml)?;

        let body_template = smtp.and_then(|s| s.body_template.clone());
        if let Some(ref template) = body_template {
            BodyRenderer::validate(template).map_err(|e| ConfigError::InvalidTemplate {
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            interface: InterfaceName::new(interface),
            interval,
            ip_version,
            hostname_lookup,
            mail,
            body_template,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            config_path: cli
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(defaults::CONFIG_PATH)),
            created_config: false,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// The file at `cli.config` (default `config.toml`, `~` expanded) is
    /// created from the template if it does not exist, then read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be created, read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .as_deref()
            .map_or_else(|| PathBuf::from(defaults::CONFIG_PATH), expand_home);

        let created = if path.exists() {
            false
        } else {
            write_default_config(&path)?;
            true
        };

        let toml = TomlConfig::load(&path)?;
        let mut config = Self::from_raw(cli, Some(&toml))?;
        config.config_path = path;
        config.created_config = created;
        Ok(config)
    }

    fn resolve_interval(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .interval
            .or_else(|| toml.and_then(|t| t.monitor.interval))
            .unwrap_or(defaults::INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "interval",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_ip_version(cli: &Cli, toml: Option<&TomlConfig>) -> Result<IpVersion, ConfigError> {
        // CLI takes precedence
        if let Some(version) = cli.ip_version {
            return Ok(version.into());
        }

        match toml.and_then(|t| t.monitor.ip_version.as_deref()) {
            Some(value) => parse_ip_version(value),
            None => Ok(IpVersion::default()),
        }
    }

    fn build_mail_settings(toml: Option<&TomlConfig>) -> Result<MailSettings, ConfigError> {
        let Some(smtp) = toml.map(|t| &t.smtp) else {
            return Ok(MailSettings::default());
        };

        let port = match smtp.smtp_port {
            Some(value) => u16::try_from(value)
                .ok()
                .filter(|port| *port != 0)
                .ok_or(ConfigError::InvalidPort { value })?,
            None => MailSettings::DEFAULT_PORT,
        };

        Ok(MailSettings {
            sender: smtp.sender.clone(),
            password: smtp.password.clone(),
            receiver: smtp.receiver.clone(),
            server: smtp.smtp_server.clone(),
            port,
            subject: smtp
                .subject
                .clone()
                .unwrap_or_else(|| MailSettings::DEFAULT_SUBJECT.to_string()),
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

fn parse_ip_version(s: &str) -> Result<IpVersion, ConfigError> {
    match s.to_lowercase().as_str() {
        "ipv4" | "v4" | "4" => Ok(IpVersion::V4),
        "ipv6" | "v6" | "6" => Ok(IpVersion::V6),
        "both" | "all" | "dual" => Ok(IpVersion::Both),
        _ => Err(ConfigError::InvalidIpVersion {
            value: s.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "validated_tests.rs"]
mod tests;
