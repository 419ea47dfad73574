//! ipnotify: IP address change notifier
//!
//! A library for periodically probing a host's network addresses,
//! detecting changes to the address set and reporting them by email.

pub mod config;
pub mod monitor;
pub mod network;
pub mod notify;
pub mod time;
