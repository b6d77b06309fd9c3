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

//! Axum router configuration for the WebRTC credential broker.

pub mod webrtc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(webrtc::health))
        .route("/api/v1/webrtc/token", post(webrtc::issue_token))
        .route("/api/v1/webrtc/token", delete(webrtc::revoke_token))
}
