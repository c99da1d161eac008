// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{WebhookEventType, WebhookLog};
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::webhook_log_repository::WebhookLogRepository;
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::webhook_service::WebhookDeliverer;
use crate::domain::use_cases::dispatch_webhook_event::DispatchWebhookEventUseCase;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Webhook手动重试用例
///
/// 以原始日志行中的事件和数据、同一签名密钥重新投递一次。
/// 重试是一次全新的尝试：追加新的日志行并返回其结果，
/// 原失败行保持不变（仅追加的日志模型）。
pub struct RetryWebhookUseCase<W, L, D>
where
    W: WebhookRepository,
    L: WebhookLogRepository,
    D: WebhookDeliverer + ?Sized,
{
    webhooks: Arc<W>,
    logs: Arc<L>,
    dispatch: DispatchWebhookEventUseCase<W, L, D>,
}

impl<W, L, D> RetryWebhookUseCase<W, L, D>
where
    W: WebhookRepository,
    L: WebhookLogRepository,
    D: WebhookDeliverer + ?Sized,
{
    pub fn new(webhooks: Arc<W>, logs: Arc<L>, deliverer: Arc<D>) -> Self {
        let dispatch =
            DispatchWebhookEventUseCase::new(webhooks.clone(), logs.clone(), deliverer);
        Self {
            webhooks,
            logs,
            dispatch,
        }
    }

    /// 重试一次历史投递
    ///
    /// # 参数
    ///
    /// * `team_id` - 请求方团队ID，需与Webhook归属一致
    /// * `webhook_id` - 目标Webhook
    /// * `log_id` - 被重试的日志行
    ///
    /// # 返回值
    ///
    /// * `Ok(WebhookLog)` - 新尝试的日志行
    /// * `Err(RepositoryError::NotFound)` - Webhook或日志不存在或不属于该团队
    pub async fn execute(
        &self,
        team_id: Uuid,
        webhook_id: Uuid,
        log_id: Uuid,
    ) -> Result<WebhookLog, RepositoryError> {
        let webhook = self
            .webhooks
            .find_by_id(webhook_id)
            .await?
            .filter(|w| w.team_id == team_id)
            .ok_or(RepositoryError::NotFound)?;

        let original = self
            .logs
            .find_by_id(log_id)
            .await?
            .filter(|log| log.webhook_id == webhook.id)
            .ok_or(RepositoryError::NotFound)?;

        let event = WebhookEventType::from_str(&original.event_type)
            .map_err(|_| RepositoryError::NotFound)?;
        // The stored payload is the full {event, data, sentAt} envelope;
        // the retry re-wraps the data with a fresh sentAt.
        let data = original
            .payload
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        self.dispatch.deliver_once(&webhook, &event, &data).await
    }
}
