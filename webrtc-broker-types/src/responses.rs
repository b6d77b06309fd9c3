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

//! Response types for the WebRTC credential broker REST API.
//!
//! Every endpoint returns an [`APIResponse<T>`] envelope:
//! - On success: `{ "success": true,  "result": <T> }`
//! - On failure: `{ "success": false, "result": <APIError> }`

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level API response envelope.
///
/// All broker endpoints wrap their payload in this structure so that clients
/// always see a consistent `{ "success", "result" }` shape.
///
/// # Success example
///
/// ```json
/// { "success": true, "result": { "token": "...", "gatewayUrl": "...", ... } }
/// ```
///
/// # Error example
///
/// ```json
/// { "success": false, "result": { "code": "GATEWAY_UNREACHABLE", "message": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

impl<A: Serialize> APIResponse<A> {
    /// Wrap a successful result.
    pub fn ok(result: A) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

impl APIResponse<crate::error::APIError> {
    /// Wrap an error result.
    pub fn error(err: crate::error::APIError) -> Self {
        Self {
            success: false,
            result: err,
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint-specific response payloads
// ---------------------------------------------------------------------------

/// Response payload for `POST /api/v1/webrtc/token`.
///
/// The TURN fields travel together: either a relay server is configured and
/// `turnUri`, `turnUsername` and `turnPassword` are all present, or none of
/// them is serialized at all.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebrtcInfoResponse {
    /// Token the signalling gateway will accept for this session.
    pub token: String,

    /// Websocket URL the client should connect to for signalling.
    pub gateway_url: String,

    /// Gateway variant tag (`"janus"` or `"kopano-webmeetings"`).
    pub gateway_type: String,

    /// STUN server URI, when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stun_uri: Option<String>,

    /// TURN server URI, when a relay server is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_uri: Option<String>,

    /// Time-scoped TURN username (`"<unix-ts>:<configured-username>"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_username: Option<String>,

    /// base64(HMAC-SHA1(secret, turnUsername)).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_password: Option<String>,
}
