/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Shared application state passed to every Axum handler via `State`.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::gateway::{select_gateway, GatewayClient};

/// Application state shared across all request handlers.
///
/// Everything in here is read-only after construction; concurrent requests
/// share no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Broker configuration, injected at construction time.
    pub config: Config,
    /// Gateway client, bound once from `config.gateway_type`.
    pub gateway: Arc<dyn GatewayClient>,
}

impl AppState {
    /// Build the state: one HTTP client with the configured timeout, one
    /// gateway client selected from the configured type.
    pub fn new(config: Config) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.gateway_timeout_secs))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;

        let gateway = select_gateway(&config, http);
        Ok(Self { config, gateway })
    }

    /// Build the state around an existing gateway client. Used by tests to
    /// substitute a stub without going through gateway selection.
    pub fn with_gateway(config: Config, gateway: Arc<dyn GatewayClient>) -> Self {
        Self { config, gateway }
    }
}
