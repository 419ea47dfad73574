//! Supplementary IPv4 discovery through local hostname resolution.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use super::{AddressProber, AddressSet, IpVersion, ProbeError};

/// Looks up the local hostname and resolves it to addresses.
pub trait HostResolver: Send + Sync {
    /// Returns the local hostname.
    fn hostname(&self) -> String;

    /// Resolves `host` through the system's name resolution.
    ///
    /// # Errors
    ///
    /// Returns the resolver's I/O error when the lookup fails.
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by `gethostname` and the standard library's resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn hostname(&self) -> String {
        gethostname::gethostname().to_string_lossy().into_owned()
    }

    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        Ok((host, 0).to_socket_addrs()?.map(|s| s.ip()).collect())
    }
}

/// Probes the IPv4 addresses that the local hostname resolves to.
///
/// Only IPv4 results are kept. When the configured [`IpVersion`] excludes
/// IPv4 the probe returns an empty set without resolving anything.
#[derive(Debug, Clone, Default)]
pub struct HostnameProber<R = SystemResolver> {
    resolver: R,
    version: IpVersion,
}

impl HostnameProber<SystemResolver> {
    /// Creates a prober using the system resolver.
    #[must_use]
    pub const fn new(version: IpVersion) -> Self {
        Self::with_resolver(SystemResolver, version)
    }
}

impl<R> HostnameProber<R> {
    /// Creates a prober with a custom resolver.
    #[must_use]
    pub const fn with_resolver(resolver: R, version: IpVersion) -> Self {
        Self { resolver, version }
    }
}

impl<R: HostResolver> AddressProber for HostnameProber<R> {
    fn probe(&self) -> Result<AddressSet, ProbeError> {
        if !self.version.includes_v4() {
            return Ok(AddressSet::new());
        }

        let host = self.resolver.hostname();
        let addresses = self
            .resolver
            .resolve(&host)
            .map_err(|source| ProbeError::Resolve {
                host: host.clone(),
                source,
            })?;

        Ok(addresses
            .into_iter()
            .filter(IpAddr::is_ipv4)
            .map(|ip| ip.to_string())
            .collect())
    }
}
