//! Network layer for discovering the host's address set.
//!
//! This module provides types and traits for:
//! - Representing discovered addresses ([`AddressSet`], [`InterfaceName`])
//! - IP version selection ([`IpVersion`])
//! - Probing addresses ([`AddressProber`], [`ProbeError`])
//! - Scraping utility output ([`parse`])
//! - Platform-specific probing ([`platform`])
//! - Hostname-based discovery ([`hostname`])
//! - Filtering and composition ([`filter`])

mod address;
pub mod filter;
pub mod hostname;
pub mod parse;
pub mod platform;
mod prober;

pub use address::{AddressSet, InterfaceName, IpVersion};
pub use prober::{AddressProber, ProbeError};
