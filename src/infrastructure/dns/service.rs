//! Host resolution trait.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves a hostname to network addresses.
///
/// Resolution is a network operation with unbounded latency and may fail
/// transiently; callers bound it with a timeout and never cache results.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - Uses the operating system resolver
/// - [`crate::infrastructure::dns::StaticResolver`] - Fixed host table for tests and offline runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Looks up the addresses of `host`.
    ///
    /// An empty vector means the name exists but has no usable address.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the lookup fails.
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
