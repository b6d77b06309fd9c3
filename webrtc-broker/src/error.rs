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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `APIResponse<APIError>` with `success: false`,
//! paired with the appropriate HTTP status code. The taxonomy is small:
//! disabled feature (501), transport failure and logical registration failure
//! (500), and remote rejection, which keeps the gateway's own status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use webrtc_broker_types::{APIError, APIResponse};

/// Application-level error that pairs an HTTP status code with an [`APIError`].
#[derive(Debug, Clone)]
pub struct AppError {
    pub status: StatusCode,
    pub body: APIError,
}

impl AppError {
    pub fn new(status: StatusCode, body: APIError) -> Self {
        Self { status, body }
    }

    /// The WebRTC feature flag is off.
    pub fn webrtc_disabled() -> Self {
        Self::new(StatusCode::NOT_IMPLEMENTED, APIError::webrtc_disabled())
    }

    /// Transport-level failure talking to the gateway admin API.
    pub fn gateway_unreachable(detail: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            APIError::gateway_unreachable(detail),
        )
    }

    /// The gateway answered with HTTP >= 300 and a structured error body.
    /// The remote status code is kept so the caller sees what the gateway saw.
    pub fn gateway_rejected(remote_status: StatusCode, body: APIError) -> Self {
        Self::new(remote_status, body)
    }

    /// The gateway accepted the call but signalled logical failure
    /// (non-success status field, missing token value).
    pub fn token_registration_failed() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            APIError::token_registration_failed(),
        )
    }

    pub fn internal(detail: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            APIError::internal_error(detail),
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.body)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = APIResponse::error(self.body);
        (self.status, Json(body)).into_response()
    }
}
