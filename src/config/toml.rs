//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. Section
//! and key names are upper-case and case-sensitive.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Mail account section
    #[serde(rename = "SMTP", default)]
    pub smtp: SmtpSection,

    /// Monitoring configuration
    #[serde(rename = "MONITOR", default)]
    pub monitor: MonitorSection,
}

/// Mail account section.
///
/// Absent keys stay `None`; a notification attempted without them fails
/// and is logged, it never aborts loading.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct SmtpSection {
    /// Sender address, also the login user
    pub sender: Option<String>,

    /// Login password or authorization code
    pub password: Option<String>,

    /// Receiver address
    pub receiver: Option<String>,

    /// SMTP server host name
    pub smtp_server: Option<String>,

    /// SMTPS port (default: 465)
    pub smtp_port: Option<i64>,

    /// Subject line (default: "ip")
    pub subject: Option<String>,

    /// Handlebars body template
    pub body_template: Option<String>,
}

/// Monitoring configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct MonitorSection {
    /// Network interface to probe
    pub interface: Option<String>,

    /// Delay between cycles in seconds
    pub interval: Option<u64>,

    /// IP version to probe: "ipv4", "ipv6", or "both"
    pub ip_version: Option<String>,

    /// Merge the hostname's IPv4 addresses into the probed set
    pub hostname_lookup: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
///
/// Only the `[SMTP]` header is active; every key is commented out.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ipnotify configuration file

[SMTP]
# Sender address, also used as the login user
# SENDER = "me@example.com"

# Login password or app-specific authorization code
# PASSWORD = "app-code"

# Receiver address
# RECEIVER = "me@example.com"

# SMTP server host name (implicit TLS)
# SMTP_SERVER = "smtp.example.com"

# SMTPS port (default: 465)
# SMTP_PORT = 465

# Subject line (default: "ip")
# SUBJECT = "ip"

# Handlebars body template (default: one address per line)
# Available variables: {{addresses}}, {{interface}}, {{hostname}}
# BODY_TEMPLATE = "{{hostname}} ({{interface}}):{{#each addresses}} {{this}}{{/each}}"

[MONITOR]
# Network interface to probe (default: "wlan0")
# INTERFACE = "wlan0"

# Delay between cycles in seconds (default: 3600)
# INTERVAL = 3600

# IP version to probe: "ipv4", "ipv6" or "both" (default: "both")
# IP_VERSION = "both"

# Merge the hostname's IPv4 addresses into the probed set (default: true)
# HOSTNAME_LOOKUP = true
"#
    .to_string()
}
