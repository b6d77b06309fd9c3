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

//! Request types for the WebRTC credential broker REST API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/webrtc/token` and
/// `DELETE /api/v1/webrtc/token`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WebrtcTokenRequest {
    /// Opaque identifier of the caller's signalling session. Used as-is as
    /// token material; the broker does not validate its format.
    pub session_id: String,
}
