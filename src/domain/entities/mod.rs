//! Core domain entities.
//!
//! - [`UrlMapping`] - A committed original URL / short code pair
//! - [`ValidatedUrl`] - Registration input that passed the URL validator
//!
//! Entities are plain data structures without business logic.

pub mod url_mapping;
pub mod validated_url;

pub use url_mapping::UrlMapping;
pub use validated_url::ValidatedUrl;
