//! Configuration layer for ipnotify.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Mail account settings (`[SMTP]`) are file-only. None of them is required
//! to start: a missing value surfaces as a failed notification.
//!
//! # Missing Config File
//!
//! If the config file does not exist it is written from
//! [`default_config_template`] and loading continues with its (empty) values.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, IpVersionArg};
pub use error::ConfigError;
pub use toml::{MonitorSection, SmtpSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
