//! Host resolver backed by a fixed table.

use super::service::HostResolver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::net::IpAddr;

/// A resolver that answers from an in-memory host table.
///
/// Hosts are matched case-insensitively. Unknown hosts fail with
/// [`io::ErrorKind::NotFound`], mirroring an NXDOMAIN answer.
///
/// # Use Cases
///
/// - Integration tests that must not touch the network
/// - Offline development with the in-memory store
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `host` with the given addresses, replacing any previous entry.
    pub fn with_host(mut self, host: &str, addrs: impl IntoIterator<Item = IpAddr>) -> Self {
        self.hosts
            .insert(host.to_ascii_lowercase(), addrs.into_iter().collect());
        self
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        self.hosts
            .get(&host.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("unknown host {host}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_known_host_case_insensitive() {
        let resolver =
            StaticResolver::new().with_host("Example.com", [IpAddr::V4(Ipv4Addr::LOCALHOST)]);

        let addrs = resolver.resolve("EXAMPLE.COM").await.unwrap();
        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
    }

    #[tokio::test]
    async fn test_unknown_host_fails() {
        let err = StaticResolver::new().resolve("nowhere.test").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_host_without_addresses() {
        let resolver = StaticResolver::new().with_host("empty.test", Vec::new());

        let addrs = resolver.resolve("empty.test").await.unwrap();
        assert!(addrs.is_empty());
    }
}
