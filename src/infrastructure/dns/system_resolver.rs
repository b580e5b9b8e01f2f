//! Host resolver backed by the operating system.

use super::service::HostResolver;
use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tracing::debug;

/// Resolves hosts through `getaddrinfo` via [`tokio::net::lookup_host`].
///
/// The lookup runs on tokio's blocking pool, so a slow resolver never stalls
/// the request-handling workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        debug!(host, count = addrs.len(), "Resolved host");
        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_localhost() {
        let addrs = SystemResolver::new().resolve("localhost").await.unwrap();

        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|ip| ip.is_loopback()));
    }
}
