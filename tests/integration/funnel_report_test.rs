// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use chrono::{Duration, Utc};
use dealrs::domain::models::proposal::{Proposal, ProposalStatus, ProposalView};
use dealrs::domain::repositories::proposal_repository::ProposalRepository;
use serde_json::Value;
use uuid::Uuid;

fn proposal(team_id: Uuid, status: ProposalStatus) -> Proposal {
    let now = Utc::now();
    Proposal {
        id: Uuid::new_v4(),
        team_id,
        deal_id: None,
        status,
        created_at: now,
        sent_at: status.is_sent_like().then_some(now),
        signed_at: (status == ProposalStatus::Signed).then_some(now),
    }
}

fn view(proposal_id: Uuid, duration_seconds: i64) -> ProposalView {
    ProposalView {
        id: Uuid::new_v4(),
        proposal_id,
        duration_seconds,
        viewed_at: Utc::now(),
    }
}

#[tokio::test]
async fn funnel_report_aggregates_team_proposals() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let sent = proposal(app.team_id, ProposalStatus::Sent);
    let viewed = proposal(app.team_id, ProposalStatus::Viewed);
    let signed = proposal(app.team_id, ProposalStatus::Signed);
    let draft = proposal(app.team_id, ProposalStatus::Draft);
    for p in [&sent, &viewed, &signed, &draft] {
        app.proposal_repo.create(p).await.unwrap();
    }

    // One engaged view, one below the threshold
    app.proposal_repo
        .record_view(&view(viewed.id, 120))
        .await
        .unwrap();
    app.proposal_repo
        .record_view(&view(sent.id, 10))
        .await
        .unwrap();

    let response = app
        .server
        .get("/v1/reports/funnel")
        .add_header(name, value)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();

    // Drafts never count; the signed proposal has no view but still
    // floors the engaged level at the signed count.
    assert_eq!(body["sent_count"], 3);
    assert_eq!(body["viewed_count"], 2);
    assert_eq!(body["engaged_count"], 1);
    assert_eq!(body["signed_count"], 1);
    assert_eq!(body["sent_percent"], 100);
    assert_eq!(body["viewed_percent"], 67);
    assert_eq!(body["engaged_percent"], 33);
    assert_eq!(body["signed_percent"], 33);
}

#[tokio::test]
async fn funnel_report_is_empty_for_unknown_team() {
    let app = create_test_app().await;

    let other = Uuid::new_v4();
    let seeded = proposal(app.team_id, ProposalStatus::Sent);
    app.proposal_repo.create(&seeded).await.unwrap();

    let (name, value) = super::helpers::header_for(other);
    let body: Value = app
        .server
        .get("/v1/reports/funnel")
        .add_header(name, value)
        .await
        .json();

    assert_eq!(body["sent_count"], 0);
    assert_eq!(body["viewed_count"], 0);
    assert_eq!(body["signed_count"], 0);
}

#[tokio::test]
async fn funnel_report_honors_date_range() {
    let app = create_test_app().await;
    let (name, value) = app.team_header();

    let mut old = proposal(app.team_id, ProposalStatus::Sent);
    old.created_at = Utc::now() - Duration::days(90);
    let recent = proposal(app.team_id, ProposalStatus::Sent);
    app.proposal_repo.create(&old).await.unwrap();
    app.proposal_repo.create(&recent).await.unwrap();

    let cutoff = (Utc::now() - Duration::days(30)).to_rfc3339();
    let body: Value = app
        .server
        .get("/v1/reports/funnel")
        .add_query_param("created_after", cutoff)
        .add_header(name, value)
        .await
        .json();

    assert_eq!(body["sent_count"], 1);
}
