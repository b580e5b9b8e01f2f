//! Business logic services for the application layer.

pub mod url_registry;
pub mod url_validator;

pub use url_registry::{RegistryError, RetryPolicy, UrlRegistry};
pub use url_validator::{UrlValidationError, UrlValidator};
