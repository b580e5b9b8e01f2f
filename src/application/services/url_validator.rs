//! Validation of submitted URLs before registration.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::{Host, Url};

use crate::domain::entities::ValidatedUrl;
use crate::infrastructure::dns::HostResolver;

/// Default upper bound for a single host lookup.
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Reasons a submitted URL is rejected.
///
/// Both variants are expected user-input failures and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("invalid url format: {0}")]
    InvalidFormat(String),

    #[error("host {host} could not be resolved: {reason}")]
    UnresolvableHost { host: String, reason: String },
}

/// Checks that a candidate is an absolute HTTP(S) URL with a resolvable host.
///
/// # Rules
///
/// 1. **Presence**: the candidate must be non-empty
/// 2. **Scheme**: must start with `http://` or `https://` (ASCII case-insensitive)
/// 3. **Syntax**: must parse as an absolute URL with a host
/// 4. **Host**: domain names must resolve to at least one address within the
///    timeout; IP literals are accepted as-is
///
/// The resolver runs without holding any lock, so a slow lookup only delays
/// its own request.
pub struct UrlValidator<R: ?Sized> {
    resolver: Arc<R>,
    timeout: Duration,
}

impl<R: HostResolver + ?Sized> UrlValidator<R> {
    /// Creates a validator with the given resolver and lookup timeout.
    pub fn new(resolver: Arc<R>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    /// Validates `candidate`, returning it unmodified on success.
    ///
    /// # Errors
    ///
    /// Returns [`UrlValidationError::InvalidFormat`] if the candidate is empty,
    /// contains ASCII control characters, is not an absolute URL, uses a scheme
    /// other than `http`/`https`, or has no host.
    ///
    /// Returns [`UrlValidationError::UnresolvableHost`] if the lookup fails,
    /// yields no address, or times out.
    pub async fn validate(&self, candidate: &str) -> Result<ValidatedUrl, UrlValidationError> {
        if candidate.is_empty() {
            return Err(UrlValidationError::InvalidFormat("url is empty".to_string()));
        }

        // `Url::parse` drops tabs and newlines, but the raw string is what gets
        // stored and later sent back in a `Location` header.
        if candidate.chars().any(|c| c.is_ascii_control()) {
            return Err(UrlValidationError::InvalidFormat(
                "url contains control characters".to_string(),
            ));
        }

        if !has_http_prefix(candidate) {
            return Err(UrlValidationError::InvalidFormat(
                "only http and https urls are allowed".to_string(),
            ));
        }

        let parsed =
            Url::parse(candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

        let host = match parsed.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => {
                return Ok(ValidatedUrl::new(candidate.to_string()));
            }
            None => {
                return Err(UrlValidationError::InvalidFormat(
                    "url has no host".to_string(),
                ));
            }
        };

        let reason = match tokio::time::timeout(self.timeout, self.resolver.resolve(&host)).await {
            Ok(Ok(addrs)) if !addrs.is_empty() => {
                debug!(host = %host, addresses = addrs.len(), "Host resolved");
                return Ok(ValidatedUrl::new(candidate.to_string()));
            }
            Ok(Ok(_)) => "no addresses found".to_string(),
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!("lookup timed out after {}ms", self.timeout.as_millis()),
        };

        debug!(host = %host, reason = %reason, "Host resolution failed");
        Err(UrlValidationError::UnresolvableHost { host, reason })
    }
}

fn has_http_prefix(candidate: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        candidate
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
