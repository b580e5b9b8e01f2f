//! Utility functions shared across layers.
//!
//! - [`db_error`] - SQLx error classification
//! - [`short_code`] - Short code path segment parsing

pub mod db_error;
pub mod short_code;
