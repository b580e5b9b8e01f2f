//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Host resolution for URL validation
//! - [`persistence`] - Mapping storage backends

pub mod dns;
pub mod persistence;
