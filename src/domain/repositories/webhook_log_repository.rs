// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::deal_repository::RepositoryError;
use crate::domain::models::webhook::{WebhookLog, WebhookStats};
use async_trait::async_trait;
use uuid::Uuid;

/// Webhook日志仓库特质
///
/// 定义投递日志的数据访问接口。日志仅追加：重试产生新行，
/// 已有行永不修改。成功/失败计数从本表按需派生，而不是
/// 作为独立递增的计数器维护。
#[async_trait]
pub trait WebhookLogRepository: Send + Sync {
    /// 追加一条投递日志
    async fn append(&self, log: &WebhookLog) -> Result<WebhookLog, RepositoryError>;
    /// 根据ID查找日志
    async fn find_by_id(&self, id: Uuid) -> Result<Option<WebhookLog>, RepositoryError>;
    /// 按时间倒序列出一个Webhook的投递日志
    async fn list_by_webhook(
        &self,
        webhook_id: Uuid,
        limit: u64,
    ) -> Result<Vec<WebhookLog>, RepositoryError>;
    /// 从日志表派生一个Webhook的投递统计
    async fn stats(&self, webhook_id: Uuid) -> Result<WebhookStats, RepositoryError>;
}
