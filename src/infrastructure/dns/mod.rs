//! Host resolution used by URL validation.
//!
//! Provides a [`HostResolver`] trait with two implementations:
//! - [`SystemResolver`] - Production resolver using the OS name service
//! - [`StaticResolver`] - Fixed host table for tests and offline runs

mod service;
mod static_resolver;
mod system_resolver;

pub use service::HostResolver;
pub use static_resolver::StaticResolver;
pub use system_resolver::SystemResolver;

#[cfg(test)]
pub use service::MockHostResolver;
