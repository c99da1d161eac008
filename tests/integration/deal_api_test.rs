// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, header_for};
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn create_deal_enters_pipeline_at_lead() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let response = app
        .server
        .post("/v1/deals")
        .add_header(name, value)
        .json(&json!({ "title": "Acme renewal", "value": 120000 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["title"], "Acme renewal");
    assert_eq!(body["stage"], "lead");
    assert_eq!(body["value"], 120000);
}

#[tokio::test]
async fn create_deal_normalizes_stage_aliases() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let response = app
        .server
        .post("/v1/deals")
        .add_header(name, value)
        .json(&json!({ "title": "Warm intro", "stage": "gorusme" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["stage"], "negotiation");
}

#[tokio::test]
async fn create_deal_rejects_empty_title() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let response = app
        .server
        .post("/v1/deals")
        .add_header(name, value)
        .json(&json!({ "title": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_team_header_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/deals")
        .json(&json!({ "title": "No tenant" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_stage_accepts_aliases_and_scopes_by_team() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let created: Value = app
        .server
        .post("/v1/deals")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "title": "Pipeline walk" }))
        .await
        .json();
    let deal_id = created["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .patch(&format!("/v1/deals/{}/stage", deal_id))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "stage": "KAZANILDI" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["stage"], "won");

    // Another tenant cannot see or move the deal
    let (other_name, other_value) = header_for(Uuid::new_v4());
    let response = app
        .server
        .patch(&format!("/v1/deals/{}/stage", deal_id))
        .add_header(other_name, other_value)
        .json(&json!({ "stage": "lost" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_deals_returns_only_own_team() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    app.server
        .post("/v1/deals")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "title": "Mine" }))
        .await
        .assert_status(StatusCode::CREATED);

    let (other_name, other_value) = header_for(Uuid::new_v4());
    app.server
        .post("/v1/deals")
        .add_header(other_name.clone(), other_value.clone())
        .json(&json!({ "title": "Theirs" }))
        .await
        .assert_status(StatusCode::CREATED);

    let mine: Value = app
        .server
        .get("/v1/deals")
        .add_header(name, value)
        .await
        .json();
    let deals = mine.as_array().unwrap();
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0]["title"], "Mine");
}
