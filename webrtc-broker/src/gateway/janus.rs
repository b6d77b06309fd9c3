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

//! Janus gateway admin API client.
//!
//! The token is the standard base64 encoding of the session id — a
//! reversible encoding, not a secret-derived value. That is the wire
//! contract with Janus: the admin_secret-authenticated registration call is
//! the actual security boundary, so the token is only as secret as the
//! session id itself. Do not replace it with an HMAC-signed value; Janus
//! would accept it but existing clients compute the same base64 locally.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

use super::{rejected_by_gateway, GatewayClient, GatewayKind};

pub struct JanusGateway {
    http: reqwest::Client,
    admin_url: String,
    admin_secret: String,
}

/// Admin request body, shared by `add_token` and `remove_token`.
#[derive(Debug, Serialize)]
struct JanusAdminRequest<'a> {
    janus: &'a str,
    token: &'a str,
    transaction: String,
    admin_secret: &'a str,
}

/// The slice of the admin response the broker cares about. The token value
/// is never read back from the body — it is computed locally.
#[derive(Debug, Deserialize)]
struct JanusAdminResponse {
    #[serde(default)]
    status: String,
}

impl JanusGateway {
    pub fn new(http: reqwest::Client, admin_url: String, admin_secret: String) -> Self {
        Self {
            http,
            admin_url,
            admin_secret,
        }
    }

    fn admin_request<'a>(&'a self, action: &'a str, token: &'a str) -> JanusAdminRequest<'a> {
        JanusAdminRequest {
            janus: action,
            token,
            transaction: Uuid::new_v4().to_string(),
            admin_secret: &self.admin_secret,
        }
    }
}

#[async_trait]
impl GatewayClient for JanusGateway {
    fn kind(&self) -> GatewayKind {
        GatewayKind::Janus
    }

    async fn issue_token(&self, session_id: &str) -> Result<String, AppError> {
        let token = STANDARD.encode(session_id.as_bytes());

        let response = self
            .http
            .post(&self.admin_url)
            .json(&self.admin_request("add_token", &token))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Janus admin API unreachable: {e}");
                AppError::gateway_unreachable(&e.to_string())
            })?;

        if response.status().as_u16() >= 300 {
            return Err(rejected_by_gateway(response).await);
        }

        let parsed: JanusAdminResponse = response.json().await.map_err(|e| {
            tracing::error!("Malformed Janus admin response: {e}");
            AppError::token_registration_failed()
        })?;

        if parsed.status != "success" {
            tracing::warn!("Janus did not register the token. Status: {:?}", parsed.status);
            return Err(AppError::token_registration_failed());
        }

        Ok(token)
    }

    async fn revoke_token(&self, session_id: &str) {
        let token = STANDARD.encode(session_id.as_bytes());

        // Fire and forget: the result is intentionally discarded.
        if let Err(e) = self
            .http
            .post(&self.admin_url)
            .json(&self.admin_request("remove_token", &token))
            .send()
            .await
        {
            tracing::debug!("Ignoring Janus remove_token failure: {e}");
        }
    }
}
