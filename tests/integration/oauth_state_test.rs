// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn issued_state_token_round_trips_through_verify() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let issued: Value = app
        .server
        .get("/v1/integrations/oauth/state")
        .add_query_param("provider", "hubspot")
        .add_header(name, value)
        .await
        .json();
    let state = issued["state"].as_str().unwrap().to_string();
    assert!(state.contains('.'));

    let response = app
        .server
        .post("/v1/integrations/oauth/state/verify")
        .json(&json!({ "state": state }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["team_id"], app.team_id.to_string());
    assert_eq!(body["provider"], "hubspot");
}

#[tokio::test]
async fn tampered_state_token_is_rejected() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let issued: Value = app
        .server
        .get("/v1/integrations/oauth/state")
        .add_query_param("provider", "hubspot")
        .add_header(name, value)
        .await
        .json();
    let state = issued["state"].as_str().unwrap();

    // Flip a character in the signature half
    let mut tampered = state.to_string();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'a' { 'b' } else { 'a' });

    let response = app
        .server
        .post("/v1/integrations/oauth/state/verify")
        .json(&json!({ "state": tampered }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_state_token_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/integrations/oauth/state/verify")
        .json(&json!({ "state": "not-a-token" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn issuing_requires_a_provider() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let response = app
        .server
        .get("/v1/integrations/oauth/state")
        .add_header(name, value)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
