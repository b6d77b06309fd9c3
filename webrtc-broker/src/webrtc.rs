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

//! Orchestration: issue a gateway token, derive TURN credentials when a
//! relay server is configured, and assemble the combined response.

use chrono::Utc;
use webrtc_broker_types::WebrtcInfoResponse;

use crate::error::AppError;
use crate::state::AppState;
use crate::turn;

/// Issue a gateway token for `session_id` and assemble the full WebRTC
/// connection info.
///
/// Fails fast with 501 when the feature is disabled — no network call is
/// made in that case. Gateway errors propagate unchanged: no retries, and
/// never a partially-populated success object.
pub async fn get_webrtc_info(
    state: &AppState,
    session_id: &str,
) -> Result<WebrtcInfoResponse, AppError> {
    if !state.config.enable {
        return Err(AppError::webrtc_disabled());
    }

    let token = state.gateway.issue_token(session_id).await?;

    let mut result = WebrtcInfoResponse {
        token,
        gateway_url: state.config.gateway_websocket_url.clone(),
        gateway_type: state.gateway.kind().as_str().to_string(),
        ..Default::default()
    };

    result.stun_uri = state.config.stun_uri.clone();

    if let Some(turn_uri) = &state.config.turn_uri {
        let username = turn::turn_username(&state.config.turn_username, Utc::now());
        result.turn_password = Some(turn::generate_turn_password(
            &username,
            &state.config.turn_shared_key,
        ));
        result.turn_username = Some(username);
        result.turn_uri = Some(turn_uri.clone());
    }

    Ok(result)
}

/// Best-effort revocation of the gateway token for `session_id`.
///
/// Nothing is reported back: revocation is a cleanup courtesy, not a
/// correctness requirement. A no-op when the feature is disabled.
pub async fn revoke_webrtc_token(state: &AppState, session_id: &str) {
    if !state.config.enable {
        return;
    }
    state.gateway.revoke_token(session_id).await;
}
