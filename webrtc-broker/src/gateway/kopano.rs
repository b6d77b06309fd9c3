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

//! Kopano Webmeetings gateway client.
//!
//! Unlike Janus, the gateway mints the token: the broker posts the session
//! id and reads the token back from the `value` field of the response.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::{rejected_by_gateway, GatewayClient, GatewayKind};

pub struct KopanoGateway {
    http: reqwest::Client,
    admin_url: String,
    admin_secret: String,
}

#[derive(Debug, Serialize)]
struct KopanoTokenRequest<'a> {
    #[serde(rename = "type")]
    token_type: &'a str,
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct KopanoTokenResponse {
    #[serde(default)]
    value: String,
}

impl KopanoGateway {
    pub fn new(http: reqwest::Client, admin_url: String, admin_secret: String) -> Self {
        Self {
            http,
            admin_url,
            admin_secret,
        }
    }
}

#[async_trait]
impl GatewayClient for KopanoGateway {
    fn kind(&self) -> GatewayKind {
        GatewayKind::KopanoWebmeetings
    }

    async fn issue_token(&self, session_id: &str) -> Result<String, AppError> {
        let response = self
            .http
            .post(format!("{}/auth/tokens", self.admin_url))
            .bearer_auth(&self.admin_secret)
            .json(&KopanoTokenRequest {
                token_type: "Token",
                id: session_id,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Kopano Webmeetings API unreachable: {e}");
                AppError::gateway_unreachable(&e.to_string())
            })?;

        if response.status().as_u16() >= 300 {
            return Err(rejected_by_gateway(response).await);
        }

        let parsed: KopanoTokenResponse = response.json().await.map_err(|e| {
            tracing::error!("Malformed Kopano Webmeetings response: {e}");
            AppError::token_registration_failed()
        })?;

        if parsed.value.is_empty() {
            tracing::warn!("Kopano Webmeetings returned no token value");
            return Err(AppError::token_registration_failed());
        }

        Ok(parsed.value)
    }

    async fn revoke_token(&self, _session_id: &str) {
        // Kopano Webmeetings has no revocation endpoint; tokens expire on
        // the gateway's own schedule.
    }
}
