// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dealrs::domain::models::deal::Deal;
use dealrs::domain::models::stage::Stage;
use dealrs::domain::models::webhook::WebhookEventType;
use dealrs::domain::repositories::deal_repository::{DealRepository, RepositoryError};
use dealrs::domain::use_cases::create_deal::CreateDealUseCase;
use dealrs::domain::use_cases::update_deal_stage::UpdateDealStageUseCase;
use dealrs::queue::dispatch_queue::DispatchQueue;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

struct InMemoryDealRepo {
    deals: Mutex<Vec<Deal>>,
}

impl InMemoryDealRepo {
    fn empty() -> Arc<Self> {
        Arc::new(Self {
            deals: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl DealRepository for InMemoryDealRepo {
    async fn create(&self, deal: &Deal) -> Result<Deal, RepositoryError> {
        self.deals.lock().unwrap().push(deal.clone());
        Ok(deal.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Deal>, RepositoryError> {
        Ok(self
            .deals
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Deal>, RepositoryError> {
        Ok(self
            .deals
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn update_stage(
        &self,
        id: Uuid,
        team_id: Uuid,
        stage: Stage,
        updated_at: DateTime<Utc>,
    ) -> Result<Deal, RepositoryError> {
        let mut deals = self.deals.lock().unwrap();
        let deal = deals
            .iter_mut()
            .find(|d| d.id == id && d.team_id == team_id)
            .ok_or(RepositoryError::NotFound)?;
        deal.stage = stage;
        deal.updated_at = updated_at;
        Ok(deal.clone())
    }
}

#[tokio::test]
async fn deal_lifecycle_emits_created_then_won() {
    let team_id = Uuid::new_v4();
    let repo = InMemoryDealRepo::empty();
    let (queue, mut receiver) = DispatchQueue::new(8);

    let create = CreateDealUseCase::new(repo.clone(), queue.clone());
    let deal = create
        .execute(
            team_id,
            "Acme renewal".to_string(),
            None,
            Some(120_000),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(deal.stage, Stage::Lead);

    let update = UpdateDealStageUseCase::new(repo.clone(), queue.clone());

    // Alias moves through the middle of the pipeline emit nothing
    let deal = update.execute(team_id, deal.id, "teklif").await.unwrap();
    assert_eq!(deal.stage, Stage::Proposal);

    // Turkish alias for won closes the deal
    let deal = update.execute(team_id, deal.id, "kazanildi").await.unwrap();
    assert_eq!(deal.stage, Stage::Won);

    let first = receiver.recv().await.unwrap();
    assert_eq!(first.event, WebhookEventType::DealCreated);
    assert_eq!(first.team_id, team_id);
    assert_eq!(first.data["deal_id"], serde_json::json!(deal.id));

    let second = receiver.recv().await.unwrap();
    assert_eq!(second.event, WebhookEventType::DealWon);
    assert_eq!(second.data["stage"], serde_json::json!("won"));

    // Nothing else was enqueued for the proposal move
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn same_stage_update_is_a_no_op() {
    let team_id = Uuid::new_v4();
    let repo = InMemoryDealRepo::empty();
    let (queue, mut receiver) = DispatchQueue::new(8);

    let create = CreateDealUseCase::new(repo.clone(), queue.clone());
    let deal = create
        .execute(team_id, "Flat move".to_string(), Some("won"), None, None, None)
        .await
        .unwrap();
    assert_eq!(deal.stage, Stage::Won);
    let created_updated_at = deal.updated_at;

    // drain deal.created
    receiver.recv().await.unwrap();

    let update = UpdateDealStageUseCase::new(repo.clone(), queue.clone());
    // `kazanıldı` normalizes to the current stage, so nothing changes
    let after = update.execute(team_id, deal.id, "kazanıldı").await.unwrap();
    assert_eq!(after.stage, Stage::Won);
    assert_eq!(after.updated_at, created_updated_at);
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn unknown_stage_falls_back_to_lead() {
    let team_id = Uuid::new_v4();
    let repo = InMemoryDealRepo::empty();
    let (queue, _receiver) = DispatchQueue::new(8);

    let create = CreateDealUseCase::new(repo.clone(), queue.clone());
    let deal = create
        .execute(
            team_id,
            "Typo stage".to_string(),
            Some("negotiaton"),
            None,
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(deal.stage, Stage::Lead);
}

#[tokio::test]
async fn stage_update_is_scoped_to_the_owning_team() {
    let team_id = Uuid::new_v4();
    let repo = InMemoryDealRepo::empty();
    let (queue, _receiver) = DispatchQueue::new(8);

    let create = CreateDealUseCase::new(repo.clone(), queue.clone());
    let deal = create
        .execute(team_id, "Fenced".to_string(), None, None, None, None)
        .await
        .unwrap();

    let update = UpdateDealStageUseCase::new(repo, queue);
    let result = update.execute(Uuid::new_v4(), deal.id, "won").await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
