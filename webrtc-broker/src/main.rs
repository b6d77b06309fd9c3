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

//! WebRTC credential broker entry point.
//!
//! A standalone Axum service that registers signalling tokens with a
//! Janus or Kopano Webmeetings gateway and derives time-limited TURN
//! credentials.

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;
use webrtc_broker::config::Config;
use webrtc_broker::routes;
use webrtc_broker::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("failed to load configuration");

    if !config.enable {
        tracing::warn!("WebRTC is disabled; all token requests will answer 501");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let listen_addr = config.listen_addr.clone();
    let state = AppState::new(config).expect("failed to build application state");
    let app = routes::router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("WebRTC credential broker listening on {listen_addr}");

    axum::serve(listener, app).await.expect("server error");
}
