use std::sync::Arc;

use crate::application::services::{UrlRegistry, UrlValidator};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::dns::HostResolver;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<UrlValidator<dyn HostResolver>>,
    pub registry: Arc<UrlRegistry<dyn MappingRepository>>,
}

impl AppState {
    pub fn new(
        validator: Arc<UrlValidator<dyn HostResolver>>,
        registry: Arc<UrlRegistry<dyn MappingRepository>>,
    ) -> Self {
        Self {
            validator,
            registry,
        }
    }
}
