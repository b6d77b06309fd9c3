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

//! Integration tests for the Janus gateway variant, exercised through the
//! broker's HTTP API against a simulated Janus admin endpoint.


use axum::http::StatusCode;
use serde_json::json;
use test_helpers::*;
use tower::ServiceExt;

// base64("my-session-id")
const SESSION_ID: &str = "my-session-id";
const SESSION_TOKEN: &str = "bXktc2Vzc2lvbi1pZA==";

#[tokio::test]
async fn issue_token_registers_with_the_admin_api() {
    let recorded = recorder();
    let gateway = spawn_gateway(fixed_gateway(
        StatusCode::OK,
        json!({"status": "success"}).to_string(),
        recorded.clone(),
    ))
    .await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["result"]["token"], json!(SESSION_TOKEN));
    assert_eq!(
        body["result"]["gatewayUrl"],
        json!("wss://gateway.example.com/ws")
    );
    assert_eq!(body["result"]["gatewayType"], json!("janus"));

    let requests = recorded_requests(&recorded);
    assert_eq!(requests.len(), 1);
    let wire = &requests[0].body;
    assert_eq!(wire["janus"], json!("add_token"));
    assert_eq!(wire["token"], json!(SESSION_TOKEN));
    assert_eq!(wire["admin_secret"], json!(TEST_ADMIN_SECRET));
    assert!(
        !wire["transaction"].as_str().unwrap_or_default().is_empty(),
        "transaction id must be a fresh non-empty string"
    );
}

#[tokio::test]
async fn non_success_status_field_is_a_registration_failure() {
    let gateway = spawn_gateway(fixed_gateway(
        StatusCode::OK,
        json!({"status": "error"}).to_string(),
        recorder(),
    ))
    .await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["result"]["code"], json!("TOKEN_REGISTRATION_FAILED"));
}

#[tokio::test]
async fn structured_remote_error_is_propagated() {
    let gateway = spawn_gateway(fixed_gateway(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"code": "JANUS_INTERNAL", "message": "session table full"}).to_string(),
        recorder(),
    ))
    .await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(resp).await;
    assert_eq!(body["result"]["code"], json!("JANUS_INTERNAL"));
    assert_eq!(body["result"]["message"], json!("session table full"));
}

#[tokio::test]
async fn unstructured_rejection_keeps_the_remote_status() {
    let gateway = spawn_gateway(fixed_gateway(
        StatusCode::FORBIDDEN,
        "wrong admin secret".to_string(),
        recorder(),
    ))
    .await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = response_json(resp).await;
    assert_eq!(body["result"]["code"], json!("GATEWAY_REJECTED"));
    assert_eq!(
        body["result"]["engineering_error"],
        json!("wrong admin secret")
    );
}

#[tokio::test]
async fn connection_failure_is_gateway_unreachable() {
    let gateway = unreachable_url().await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(resp).await;
    assert_eq!(body["result"]["code"], json!("GATEWAY_UNREACHABLE"));
}

#[tokio::test]
async fn revoke_sends_remove_token() {
    let recorded = recorder();
    let gateway = spawn_gateway(fixed_gateway(
        StatusCode::OK,
        json!({"status": "success"}).to_string(),
        recorded.clone(),
    ))
    .await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "DELETE",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let requests = recorded_requests(&recorded);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["janus"], json!("remove_token"));
    assert_eq!(requests[0].body["token"], json!(SESSION_TOKEN));
}

#[tokio::test]
async fn revoke_swallows_http_errors() {
    let gateway = spawn_gateway(fixed_gateway(
        StatusCode::INTERNAL_SERVER_ERROR,
        "not even json {{{".to_string(),
        recorder(),
    ))
    .await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "DELETE",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn revoke_swallows_transport_errors() {
    let gateway = unreachable_url().await;

    let app = build_app(test_config(&gateway));
    let resp = app
        .oneshot(json_request(
            "DELETE",
            "/api/v1/webrtc/token",
            json!({"sessionId": SESSION_ID}),
        ))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
