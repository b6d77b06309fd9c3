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

//! Signalling gateway clients.
//!
//! Each supported gateway admin API gets one [`GatewayClient`] implementation.
//! The variant is bound once at construction time in [`select_gateway`]; no
//! string dispatch happens per call.

pub mod janus;
pub mod kopano;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use webrtc_broker_types::APIError;

use crate::config::Config;
use crate::error::AppError;

pub use janus::JanusGateway;
pub use kopano::KopanoGateway;

/// Tag identifying the gateway variant, echoed back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
    Janus,
    KopanoWebmeetings,
}

impl GatewayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayKind::Janus => "janus",
            GatewayKind::KopanoWebmeetings => "kopano-webmeetings",
        }
    }
}

/// A client for one signalling gateway's admin HTTP API.
///
/// Implementations normalize the gateway's heterogeneous success/failure
/// responses into the broker's uniform error taxonomy.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// Which variant this client talks to.
    fn kind(&self) -> GatewayKind;

    /// Register a token for `session_id` with the gateway and return it.
    async fn issue_token(&self, session_id: &str) -> Result<String, AppError>;

    /// Best-effort revocation. Returns nothing: any outcome — transport
    /// error, HTTP error, malformed body — is discarded. The gateway's own
    /// token TTL is the real safety net.
    async fn revoke_token(&self, session_id: &str);
}

/// Bind the configured gateway type to a concrete client.
///
/// Matching is case-insensitive; anything unrecognized (including an empty
/// string) falls back to Janus rather than failing hard.
pub fn select_gateway(config: &Config, http: reqwest::Client) -> Arc<dyn GatewayClient> {
    match config.gateway_type.to_lowercase().as_str() {
        "kopano-webmeetings" => Arc::new(KopanoGateway::new(
            http,
            config.gateway_admin_url.clone(),
            config.gateway_admin_secret.clone(),
        )),
        _ => Arc::new(JanusGateway::new(
            http,
            config.gateway_admin_url.clone(),
            config.gateway_admin_secret.clone(),
        )),
    }
}

/// Turn an HTTP >= 300 gateway response into a [`AppError::gateway_rejected`].
///
/// The body is expected to be a structured error; when it is, the remote
/// code and message are propagated verbatim. An unparseable body degrades to
/// a generic rejection carrying the raw body for debugging.
pub(crate) async fn rejected_by_gateway(response: reqwest::Response) -> AppError {
    let remote_status = response.status();
    let body = response.text().await.unwrap_or_default();

    let api_error = match serde_json::from_str::<APIError>(&body) {
        Ok(err) => err,
        Err(_) => {
            tracing::warn!(
                "Gateway rejected the request with an unstructured body. \
                 Status: {remote_status}, Body: {body}"
            );
            APIError {
                code: "GATEWAY_REJECTED".to_string(),
                message: format!("Gateway rejected the request with status {remote_status}"),
                engineering_error: (!body.is_empty()).then(|| body.clone()),
            }
        }
    };

    AppError::gateway_rejected(
        StatusCode::from_u16(remote_status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        api_error,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_type(gateway_type: &str) -> Config {
        Config {
            listen_addr: "0.0.0.0:8082".to_string(),
            enable: true,
            gateway_type: gateway_type.to_string(),
            gateway_websocket_url: "wss://gw.example.com/ws".to_string(),
            gateway_admin_url: "http://gw.example.com/admin".to_string(),
            gateway_admin_secret: "janusoverlord".to_string(),
            gateway_timeout_secs: 10,
            stun_uri: None,
            turn_uri: None,
            turn_username: String::new(),
            turn_shared_key: String::new(),
        }
    }

    #[test]
    fn selection_is_case_insensitive() {
        for ty in ["janus", "Janus", "JANUS"] {
            let client = select_gateway(&config_with_type(ty), reqwest::Client::new());
            assert_eq!(client.kind(), GatewayKind::Janus, "type {ty:?}");
        }
        for ty in ["kopano-webmeetings", "Kopano-Webmeetings", "KOPANO-WEBMEETINGS"] {
            let client = select_gateway(&config_with_type(ty), reqwest::Client::new());
            assert_eq!(client.kind(), GatewayKind::KopanoWebmeetings, "type {ty:?}");
        }
    }

    #[test]
    fn unrecognized_types_default_to_janus() {
        for ty in ["", "unknown-type", "kopano", "jitsi"] {
            let client = select_gateway(&config_with_type(ty), reqwest::Client::new());
            assert_eq!(client.kind(), GatewayKind::Janus, "type {ty:?}");
        }
    }
}
