// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{WebhookLog, WebhookStats};
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::webhook_log_repository::WebhookLogRepository;
use crate::infrastructure::database::entities::webhook_log;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// Webhook日志仓库实现
///
/// 日志表只接受插入。统计接口以计数查询派生成功/失败数，
/// 取代独立维护的递增计数器。
#[derive(Clone)]
pub struct WebhookLogRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl WebhookLogRepositoryImpl {
    /// 创建新的Webhook日志仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebhookLogRepository for WebhookLogRepositoryImpl {
    async fn append(&self, log: &WebhookLog) -> Result<WebhookLog, RepositoryError> {
        let active_model = webhook_log::ActiveModel {
            id: Set(log.id),
            webhook_id: Set(log.webhook_id),
            team_id: Set(log.team_id),
            event_type: Set(log.event_type.clone()),
            payload: Set(log.payload.clone()),
            response_status: Set(log.response_status.map(|s| s as i16)),
            response_body: Set(log.response_body.clone()),
            success: Set(log.success),
            duration_ms: Set(log.duration_ms),
            error_message: Set(log.error_message.clone()),
            created_at: Set(log.created_at.into()),
        };

        webhook_log::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(log.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WebhookLog>, RepositoryError> {
        let model = webhook_log::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_webhook(
        &self,
        webhook_id: Uuid,
        limit: u64,
    ) -> Result<Vec<WebhookLog>, RepositoryError> {
        let models = webhook_log::Entity::find()
            .filter(webhook_log::Column::WebhookId.eq(webhook_id))
            .order_by_desc(webhook_log::Column::CreatedAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn stats(&self, webhook_id: Uuid) -> Result<WebhookStats, RepositoryError> {
        let success_count = webhook_log::Entity::find()
            .filter(webhook_log::Column::WebhookId.eq(webhook_id))
            .filter(webhook_log::Column::Success.eq(true))
            .count(self.db.as_ref())
            .await?;

        let failure_count = webhook_log::Entity::find()
            .filter(webhook_log::Column::WebhookId.eq(webhook_id))
            .filter(webhook_log::Column::Success.eq(false))
            .count(self.db.as_ref())
            .await?;

        Ok(WebhookStats {
            success_count,
            failure_count,
        })
    }
}

impl From<webhook_log::Model> for WebhookLog {
    fn from(model: webhook_log::Model) -> Self {
        Self {
            id: model.id,
            webhook_id: model.webhook_id,
            team_id: model.team_id,
            event_type: model.event_type,
            payload: model.payload,
            response_status: model.response_status.map(|s| s as u16),
            response_body: model.response_body,
            success: model.success,
            duration_ms: model.duration_ms,
            error_message: model.error_message,
            created_at: model.created_at.into(),
        }
    }
}
