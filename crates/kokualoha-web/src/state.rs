//! Shared application state for the web server.

use std::sync::Arc;

use kokualoha_assistant::ConciergeGateway;

use crate::config::{Config, ContactConfig};

/// Shared state injected into every Axum handler.
///
/// The gateway is stateless and safe to call concurrently; the only shared
/// resources here are the pooled HTTP client and the contact configuration.
pub struct AppState {
    pub gateway: ConciergeGateway,
    pub contact: ContactConfig,
    /// Pooled client for contact-form forwarding.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            gateway: ConciergeGateway::new(config.api_key(), config.assistant.model.clone()),
            contact: config.contact.clone(),
            http: reqwest::Client::new(),
        }
    }
}

pub type SharedState = Arc<AppState>;
