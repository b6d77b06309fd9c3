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

//! Handlers for the WebRTC credential endpoints.

use axum::{extract::State, http::StatusCode, Json};
use webrtc_broker_types::{
    requests::WebrtcTokenRequest,
    responses::{APIResponse, WebrtcInfoResponse},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::webrtc;

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// POST /api/v1/webrtc/token
pub async fn issue_token(
    State(state): State<AppState>,
    Json(body): Json<WebrtcTokenRequest>,
) -> Result<Json<APIResponse<WebrtcInfoResponse>>, AppError> {
    let info = webrtc::get_webrtc_info(&state, &body.session_id).await?;
    Ok(Json(APIResponse::ok(info)))
}

/// DELETE /api/v1/webrtc/token
///
/// Always answers 204: revocation is best-effort and its outcome is
/// deliberately not surfaced.
pub async fn revoke_token(
    State(state): State<AppState>,
    Json(body): Json<WebrtcTokenRequest>,
) -> StatusCode {
    webrtc::revoke_webrtc_token(&state, &body.session_id).await;
    StatusCode::NO_CONTENT
}
