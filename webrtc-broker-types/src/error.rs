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

//! API error types.
//!
//! Every failed API response is returned as `APIResponse<APIError>` with
//! `success: false`.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `result` field of a failed
/// [`crate::APIResponse`].
///
/// The `code` field is a machine-readable identifier (e.g.
/// `"GATEWAY_UNREACHABLE"`). The `message` field is a human-readable
/// description suitable for display. The `engineering_error` field carries
/// debug-level detail (transport errors, remote bodies) that is useful during
/// development but should be stripped or redacted in production.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIError {
    /// Machine-readable error code (e.g. `"WEBRTC_DISABLED"`).
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Optional engineering-level detail for debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    pub fn webrtc_disabled() -> Self {
        Self {
            code: "WEBRTC_DISABLED".to_string(),
            message: "WebRTC is disabled on this server".to_string(),
            engineering_error: None,
        }
    }

    pub fn gateway_unreachable(detail: &str) -> Self {
        Self {
            code: "GATEWAY_UNREACHABLE".to_string(),
            message: "Could not reach the signalling gateway".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }

    pub fn gateway_rejected(message: &str) -> Self {
        Self {
            code: "GATEWAY_REJECTED".to_string(),
            message: message.to_string(),
            engineering_error: None,
        }
    }

    pub fn token_registration_failed() -> Self {
        Self {
            code: "TOKEN_REGISTRATION_FAILED".to_string(),
            message: "The signalling gateway did not register the token".to_string(),
            engineering_error: None,
        }
    }

    pub fn internal_error(detail: &str) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "Internal server error".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for APIError {}
