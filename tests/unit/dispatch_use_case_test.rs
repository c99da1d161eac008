// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dealrs::domain::models::webhook::{Webhook, WebhookEventType, WebhookLog, WebhookStats};
use dealrs::domain::repositories::deal_repository::RepositoryError;
use dealrs::domain::repositories::webhook_log_repository::WebhookLogRepository;
use dealrs::domain::repositories::webhook_repository::WebhookRepository;
use dealrs::domain::services::webhook_service::{
    build_webhook_signature, DeliveryOutcome, WebhookDeliverer,
};
use dealrs::domain::use_cases::dispatch_webhook_event::DispatchWebhookEventUseCase;
use dealrs::domain::use_cases::retry_webhook::RetryWebhookUseCase;
use dealrs::queue::dispatch_queue::DispatchRequest;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

struct InMemoryWebhookRepo {
    webhooks: Mutex<Vec<Webhook>>,
}

impl InMemoryWebhookRepo {
    fn with(webhooks: Vec<Webhook>) -> Arc<Self> {
        Arc::new(Self {
            webhooks: Mutex::new(webhooks),
        })
    }

    fn get(&self, id: Uuid) -> Option<Webhook> {
        self.webhooks
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }
}

#[async_trait]
impl WebhookRepository for InMemoryWebhookRepo {
    async fn create(&self, webhook: &Webhook) -> Result<Webhook, RepositoryError> {
        self.webhooks.lock().unwrap().push(webhook.clone());
        Ok(webhook.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Webhook>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Webhook>, RepositoryError> {
        Ok(self
            .webhooks
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn find_subscribed(
        &self,
        team_id: Uuid,
        event: &WebhookEventType,
    ) -> Result<Vec<Webhook>, RepositoryError> {
        Ok(self
            .webhooks
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.team_id == team_id && w.active && w.subscribes_to(event))
            .cloned()
            .collect())
    }

    async fn touch_last_triggered(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut webhooks = self.webhooks.lock().unwrap();
        let webhook = webhooks
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(RepositoryError::NotFound)?;
        webhook.last_triggered_at = Some(at);
        Ok(())
    }

    async fn delete(&self, id: Uuid, team_id: Uuid) -> Result<(), RepositoryError> {
        let mut webhooks = self.webhooks.lock().unwrap();
        let before = webhooks.len();
        webhooks.retain(|w| !(w.id == id && w.team_id == team_id));
        if webhooks.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

struct InMemoryLogRepo {
    logs: Mutex<Vec<WebhookLog>>,
}

impl InMemoryLogRepo {
    fn empty() -> Arc<Self> {
        Arc::new(Self {
            logs: Mutex::new(Vec::new()),
        })
    }

    fn all(&self) -> Vec<WebhookLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookLogRepository for InMemoryLogRepo {
    async fn append(&self, log: &WebhookLog) -> Result<WebhookLog, RepositoryError> {
        self.logs.lock().unwrap().push(log.clone());
        Ok(log.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WebhookLog>, RepositoryError> {
        Ok(self
            .logs
            .lock()
            .unwrap()
            .iter()
            .find(|log| log.id == id)
            .cloned())
    }

    async fn list_by_webhook(
        &self,
        webhook_id: Uuid,
        limit: u64,
    ) -> Result<Vec<WebhookLog>, RepositoryError> {
        let mut entries: Vec<WebhookLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.webhook_id == webhook_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }

    async fn stats(&self, webhook_id: Uuid) -> Result<WebhookStats, RepositoryError> {
        let logs = self.logs.lock().unwrap();
        let success_count = logs
            .iter()
            .filter(|log| log.webhook_id == webhook_id && log.success)
            .count() as u64;
        let failure_count = logs
            .iter()
            .filter(|log| log.webhook_id == webhook_id && !log.success)
            .count() as u64;
        Ok(WebhookStats {
            success_count,
            failure_count,
        })
    }
}

/// 记录每次调用的投递替身，按URL决定成败
struct RecordingDeliverer {
    failing_url: Option<String>,
    calls: Mutex<Vec<(String, String, String, String)>>,
}

impl RecordingDeliverer {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            failing_url: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing_for(url: &str) -> Arc<Self> {
        Arc::new(Self {
            failing_url: Some(url.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookDeliverer for RecordingDeliverer {
    async fn deliver(
        &self,
        url: &str,
        event: &str,
        payload: &str,
        signature: &str,
    ) -> DeliveryOutcome {
        self.calls.lock().unwrap().push((
            url.to_string(),
            event.to_string(),
            payload.to_string(),
            signature.to_string(),
        ));
        if self.failing_url.as_deref() == Some(url) {
            DeliveryOutcome {
                status: Some(500),
                body: Some("boom".to_string()),
                error: Some("endpoint returned 500".to_string()),
                duration_ms: 3,
                success: false,
            }
        } else {
            DeliveryOutcome {
                status: Some(200),
                body: Some("ok".to_string()),
                error: None,
                duration_ms: 3,
                success: true,
            }
        }
    }
}

fn webhook(team_id: Uuid, url: &str, events: &[&str], active: bool) -> Webhook {
    let mut webhook = Webhook::new(
        team_id,
        url.to_string(),
        format!("whsec_{}", url.len()),
        events.iter().map(|e| e.to_string()).collect(),
    );
    webhook.active = active;
    webhook
}

fn won_request(team_id: Uuid) -> DispatchRequest {
    DispatchRequest {
        team_id,
        event: WebhookEventType::DealWon,
        data: serde_json::json!({ "deal_id": Uuid::new_v4(), "value": 4200 }),
    }
}

#[tokio::test]
async fn dispatch_skips_unsubscribed_and_inactive_webhooks() {
    let team_id = Uuid::new_v4();
    let subscribed = webhook(team_id, "https://a.example/hook", &["deal.won"], true);
    let inactive = webhook(team_id, "https://b.example/hook", &["deal.won"], false);
    let other_event = webhook(team_id, "https://c.example/hook", &["deal.created"], true);
    let other_team = webhook(
        Uuid::new_v4(),
        "https://d.example/hook",
        &["deal.won"],
        true,
    );

    let webhooks = InMemoryWebhookRepo::with(vec![
        subscribed.clone(),
        inactive,
        other_event,
        other_team,
    ]);
    let logs = InMemoryLogRepo::empty();
    let deliverer = RecordingDeliverer::succeeding();
    let use_case =
        DispatchWebhookEventUseCase::new(webhooks.clone(), logs.clone(), deliverer.clone());

    use_case.execute(&won_request(team_id)).await.unwrap();

    let calls = deliverer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://a.example/hook");
    assert_eq!(calls[0].1, "deal.won");

    let entries = logs.all();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].webhook_id, subscribed.id);
    assert!(entries[0].success);
    assert!(webhooks
        .get(subscribed.id)
        .unwrap()
        .last_triggered_at
        .is_some());
}

#[tokio::test]
async fn dispatch_signs_payload_with_webhook_secret() {
    let team_id = Uuid::new_v4();
    let subscribed = webhook(team_id, "https://a.example/hook", &["deal.won"], true);
    let webhooks = InMemoryWebhookRepo::with(vec![subscribed.clone()]);
    let logs = InMemoryLogRepo::empty();
    let deliverer = RecordingDeliverer::succeeding();
    let use_case =
        DispatchWebhookEventUseCase::new(webhooks, logs, deliverer.clone());

    use_case.execute(&won_request(team_id)).await.unwrap();

    let calls = deliverer.calls();
    let (_, _, payload, signature) = &calls[0];
    assert_eq!(
        signature,
        &build_webhook_signature(&subscribed.secret_key, payload)
    );

    let envelope: serde_json::Value = serde_json::from_str(payload).unwrap();
    assert_eq!(envelope["event"], "deal.won");
    assert!(envelope.get("sentAt").is_some());
}

#[tokio::test]
async fn failed_delivery_is_logged_and_does_not_block_others() {
    let team_id = Uuid::new_v4();
    let failing = webhook(team_id, "https://down.example/hook", &["deal.won"], true);
    let healthy = webhook(team_id, "https://up.example/hook", &["deal.won"], true);

    let webhooks = InMemoryWebhookRepo::with(vec![failing.clone(), healthy.clone()]);
    let logs = InMemoryLogRepo::empty();
    let deliverer = RecordingDeliverer::failing_for("https://down.example/hook");
    let use_case = DispatchWebhookEventUseCase::new(webhooks, logs.clone(), deliverer);

    // The failure lives in the log row, not in the result
    use_case.execute(&won_request(team_id)).await.unwrap();

    let entries = logs.all();
    assert_eq!(entries.len(), 2);
    let failed = entries.iter().find(|l| l.webhook_id == failing.id).unwrap();
    assert!(!failed.success);
    assert_eq!(failed.response_status, Some(500));
    assert!(failed.error_message.is_some());
    let ok = entries.iter().find(|l| l.webhook_id == healthy.id).unwrap();
    assert!(ok.success);
}

#[tokio::test]
async fn retry_appends_a_new_row_and_keeps_the_original() {
    let team_id = Uuid::new_v4();
    let target = webhook(team_id, "https://down.example/hook", &["deal.won"], true);
    let webhooks = InMemoryWebhookRepo::with(vec![target.clone()]);
    let logs = InMemoryLogRepo::empty();

    let failing = RecordingDeliverer::failing_for("https://down.example/hook");
    let dispatch = DispatchWebhookEventUseCase::new(webhooks.clone(), logs.clone(), failing);
    dispatch.execute(&won_request(team_id)).await.unwrap();

    let original = logs.all()[0].clone();
    assert!(!original.success);

    let retry = RetryWebhookUseCase::new(webhooks, logs.clone(), RecordingDeliverer::succeeding());
    let new_log = retry
        .execute(team_id, target.id, original.id)
        .await
        .unwrap();

    assert_ne!(new_log.id, original.id);
    assert!(new_log.success);
    assert_eq!(new_log.event_type, original.event_type);

    let entries = logs.all();
    assert_eq!(entries.len(), 2);
    // The original failure row is untouched
    let kept = entries.iter().find(|l| l.id == original.id).unwrap();
    assert!(!kept.success);

    let stats = logs.stats(target.id).await.unwrap();
    assert_eq!(stats.success_count, 1);
    assert_eq!(stats.failure_count, 1);
}

#[tokio::test]
async fn retry_is_scoped_to_the_owning_team() {
    let team_id = Uuid::new_v4();
    let target = webhook(team_id, "https://a.example/hook", &["deal.won"], true);
    let webhooks = InMemoryWebhookRepo::with(vec![target.clone()]);
    let logs = InMemoryLogRepo::empty();

    let dispatch = DispatchWebhookEventUseCase::new(
        webhooks.clone(),
        logs.clone(),
        RecordingDeliverer::succeeding(),
    );
    dispatch.execute(&won_request(team_id)).await.unwrap();
    let log_id = logs.all()[0].id;

    let retry = RetryWebhookUseCase::new(webhooks, logs, RecordingDeliverer::succeeding());
    let result = retry.execute(Uuid::new_v4(), target.id, log_id).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
