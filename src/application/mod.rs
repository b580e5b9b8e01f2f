//! Application layer services implementing business logic.
//!
//! Services consume repository and resolver traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Format and host resolution checks
//! - [`services::url_registry::UrlRegistry`] - Code assignment, dedup, and lookup

pub mod services;
