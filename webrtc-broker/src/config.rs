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

//! Application configuration loaded from environment variables.

use std::env;

/// Configuration for the WebRTC credential broker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8082").
    pub listen_addr: String,
    /// Master feature switch. When off, every request fails fast with 501
    /// before any network call is made.
    pub enable: bool,
    /// Gateway variant, matched case-insensitively. Anything other than
    /// "kopano-webmeetings" selects Janus.
    pub gateway_type: String,
    /// Websocket URL returned verbatim to clients for signalling.
    pub gateway_websocket_url: String,
    /// Base URL of the gateway admin HTTP API.
    pub gateway_admin_url: String,
    /// Shared secret / bearer token for the gateway admin API.
    pub gateway_admin_secret: String,
    /// Timeout applied to every outbound gateway call, in seconds.
    pub gateway_timeout_secs: u64,
    /// STUN server URI. `None` if unset or empty.
    pub stun_uri: Option<String>,
    /// TURN server URI. `None` disables TURN credential derivation.
    pub turn_uri: Option<String>,
    /// Base username embedded in derived TURN usernames.
    pub turn_username: String,
    /// Shared secret for the HMAC-SHA1 TURN credential derivation.
    pub turn_shared_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required (when `WEBRTC_ENABLE` is true)
    /// - `WEBRTC_GATEWAY_WEBSOCKET_URL`
    /// - `WEBRTC_GATEWAY_ADMIN_URL`
    /// - `WEBRTC_GATEWAY_ADMIN_SECRET`
    ///
    /// # Optional
    /// - `WEBRTC_ENABLE` (default: `"false"`)
    /// - `WEBRTC_GATEWAY_TYPE` (default: `"janus"`)
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8082"`)
    /// - `GATEWAY_TIMEOUT_SECS` (default: `"10"`)
    /// - `WEBRTC_STUN_URI`, `WEBRTC_TURN_URI`
    /// - TURN: `WEBRTC_TURN_USERNAME`, `WEBRTC_TURN_SHARED_KEY`
    ///   (required only when `WEBRTC_TURN_URI` is set)
    pub fn from_env() -> Result<Self, String> {
        let enable = env::var("WEBRTC_ENABLE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
        let gateway_type = env::var("WEBRTC_GATEWAY_TYPE").unwrap_or_else(|_| "janus".to_string());
        let gateway_timeout_secs = env::var("GATEWAY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| "GATEWAY_TIMEOUT_SECS must be a valid integer")?;

        let require = |name: &str| -> Result<String, String> {
            if !enable {
                return Ok(env::var(name).unwrap_or_default());
            }
            env::var(name).map_err(|_| format!("{name} environment variable is required"))
        };

        let gateway_websocket_url = require("WEBRTC_GATEWAY_WEBSOCKET_URL")?;
        let gateway_admin_url = require("WEBRTC_GATEWAY_ADMIN_URL")?;
        let gateway_admin_secret = require("WEBRTC_GATEWAY_ADMIN_SECRET")?;

        let stun_uri = env::var("WEBRTC_STUN_URI").ok().filter(|s| !s.is_empty());
        let turn_uri = env::var("WEBRTC_TURN_URI").ok().filter(|s| !s.is_empty());

        let (turn_username, turn_shared_key) = if turn_uri.is_some() {
            (
                env::var("WEBRTC_TURN_USERNAME")
                    .map_err(|_| "WEBRTC_TURN_USERNAME required when WEBRTC_TURN_URI is set")?,
                env::var("WEBRTC_TURN_SHARED_KEY")
                    .map_err(|_| "WEBRTC_TURN_SHARED_KEY required when WEBRTC_TURN_URI is set")?,
            )
        } else {
            (
                env::var("WEBRTC_TURN_USERNAME").unwrap_or_default(),
                env::var("WEBRTC_TURN_SHARED_KEY").unwrap_or_default(),
            )
        };

        Ok(Self {
            listen_addr,
            enable,
            gateway_type,
            gateway_websocket_url,
            gateway_admin_url,
            gateway_admin_secret,
            gateway_timeout_secs,
            stun_uri,
            turn_uri,
            turn_username,
            turn_shared_key,
        })
    }
}
