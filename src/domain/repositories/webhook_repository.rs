// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::deal_repository::RepositoryError;
use crate::domain::models::webhook::{Webhook, WebhookEventType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Webhook仓库特质
///
/// 定义Webhook订阅配置的数据访问接口
#[async_trait]
pub trait WebhookRepository: Send + Sync {
    /// 创建Webhook
    async fn create(&self, webhook: &Webhook) -> Result<Webhook, RepositoryError>;
    /// 根据ID查找Webhook
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Webhook>, RepositoryError>;
    /// 列出团队的全部Webhook
    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Webhook>, RepositoryError>;
    /// 查找团队中启用且订阅了给定事件的Webhook
    async fn find_subscribed(
        &self,
        team_id: Uuid,
        event: &WebhookEventType,
    ) -> Result<Vec<Webhook>, RepositoryError>;
    /// 更新最近触发时间
    async fn touch_last_triggered(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
    /// 删除团队的一个Webhook
    async fn delete(&self, id: Uuid, team_id: Uuid) -> Result<(), RepositoryError>;
}
