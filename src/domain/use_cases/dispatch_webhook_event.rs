// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{Webhook, WebhookEventType, WebhookLog};
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::webhook_log_repository::WebhookLogRepository;
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::webhook_service::{
    build_webhook_payload, build_webhook_signature, WebhookDeliverer,
};
use crate::queue::dispatch_queue::DispatchRequest;
use chrono::Utc;
use metrics::{counter, histogram};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Webhook事件分发用例
///
/// 把一次管道事件投递给该团队所有订阅了此事件的启用Webhook：
/// 构建负载与签名、执行出站HTTP投递、为每个Webhook追加恰好
/// 一条日志并刷新其最近触发时间。单个Webhook的投递失败以
/// `success = false` 落入日志，不影响其余Webhook的投递。
pub struct DispatchWebhookEventUseCase<W, L, D>
where
    W: WebhookRepository,
    L: WebhookLogRepository,
    D: WebhookDeliverer + ?Sized,
{
    webhooks: Arc<W>,
    logs: Arc<L>,
    deliverer: Arc<D>,
}

impl<W, L, D> DispatchWebhookEventUseCase<W, L, D>
where
    W: WebhookRepository,
    L: WebhookLogRepository,
    D: WebhookDeliverer + ?Sized,
{
    pub fn new(webhooks: Arc<W>, logs: Arc<L>, deliverer: Arc<D>) -> Self {
        Self {
            webhooks,
            logs,
            deliverer,
        }
    }

    /// 分发一次事件
    ///
    /// 只通知 `events` 集合包含该事件名的启用Webhook。
    pub async fn execute(&self, request: &DispatchRequest) -> Result<(), RepositoryError> {
        let subscribed = self
            .webhooks
            .find_subscribed(request.team_id, &request.event)
            .await?;

        if subscribed.is_empty() {
            return Ok(());
        }

        info!(
            "Dispatching {} to {} webhook(s)",
            request.event,
            subscribed.len()
        );

        for webhook in &subscribed {
            if let Err(e) = self
                .deliver_once(webhook, &request.event, &request.data)
                .await
            {
                // Repository failures are logged and skipped; the remaining
                // webhooks still get their delivery.
                error!("Failed to record webhook delivery {}: {}", webhook.id, e);
            }
        }

        Ok(())
    }

    /// 对单个Webhook执行一次投递尝试
    ///
    /// 一次尝试恰好追加一条日志；投递失败是日志行的内容，
    /// 不是本方法的错误。返回追加的日志行。
    pub async fn deliver_once(
        &self,
        webhook: &Webhook,
        event: &WebhookEventType,
        data: &serde_json::Value,
    ) -> Result<WebhookLog, RepositoryError> {
        let event_name = event.to_string();
        let sent_at = Utc::now();
        let payload = build_webhook_payload(&event_name, data, sent_at);
        let signature = build_webhook_signature(&webhook.secret_key, &payload);

        counter!("webhook_delivery_attempts_total").increment(1);
        let outcome = self
            .deliverer
            .deliver(&webhook.url, &event_name, &payload, &signature)
            .await;
        histogram!("webhook_delivery_duration_seconds")
            .record(outcome.duration_ms as f64 / 1000.0);

        if outcome.success {
            counter!("webhook_delivery_success_total").increment(1);
        } else {
            error!(
                "Webhook {} delivery failed: {}",
                webhook.id,
                outcome.error.as_deref().unwrap_or("non-2xx response")
            );
            counter!("webhook_delivery_failed_total").increment(1);
        }

        let log = WebhookLog {
            id: Uuid::new_v4(),
            webhook_id: webhook.id,
            team_id: webhook.team_id,
            event_type: event_name,
            payload: serde_json::from_str(&payload).unwrap_or(serde_json::Value::Null),
            response_status: outcome.status,
            response_body: outcome.body,
            success: outcome.success,
            duration_ms: outcome.duration_ms,
            error_message: outcome.error,
            created_at: sent_at,
        };

        let log = self.logs.append(&log).await?;
        self.webhooks
            .touch_last_triggered(webhook.id, sent_at)
            .await?;

        Ok(log)
    }
}
