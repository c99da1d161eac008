// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::deal::Deal;
use crate::domain::models::stage::Stage;
use crate::domain::models::webhook::WebhookEventType;
use crate::domain::repositories::deal_repository::{DealRepository, RepositoryError};
use crate::queue::dispatch_queue::{DispatchQueue, DispatchRequest};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// 交易阶段更新用例
///
/// 请求内的顺序是严格的：(a) 持久化归一化后的阶段变更，
/// (b) 判断变更是否进入 won/lost，(c) 入队对应的Webhook事件。
/// 事件分发绝不先于持久化，分发失败也绝不回滚 (a)/(b)——
/// 用户把交易拖到 won 时，即使所有订阅端点都不可达，
/// 移动本身依然成功。并发更新同一交易采用后写胜出。
pub struct UpdateDealStageUseCase<R: DealRepository> {
    repo: Arc<R>,
    dispatch_queue: DispatchQueue,
}

impl<R: DealRepository> UpdateDealStageUseCase<R> {
    pub fn new(repo: Arc<R>, dispatch_queue: DispatchQueue) -> Self {
        Self {
            repo,
            dispatch_queue,
        }
    }

    /// 更新交易阶段
    ///
    /// 输入阶段字符串经别名表归一化。当前阶段与目标一致时
    /// 不产生写入也不分发事件。
    pub async fn execute(
        &self,
        team_id: Uuid,
        deal_id: Uuid,
        raw_stage: &str,
    ) -> Result<Deal, RepositoryError> {
        let next_stage = Stage::normalize(raw_stage);

        let deal = self
            .repo
            .find_by_id(deal_id)
            .await?
            .filter(|d| d.team_id == team_id)
            .ok_or(RepositoryError::NotFound)?;

        // Same-stage update: no write, no dispatch
        if deal.stage == next_stage {
            return Ok(deal);
        }

        let updated = self
            .repo
            .update_stage(deal_id, team_id, next_stage, Utc::now())
            .await?;

        // (c) runs only after the new stage is durable
        if let Some(event) = closing_event(next_stage) {
            self.dispatch_queue.enqueue(DispatchRequest {
                team_id,
                event,
                data: serde_json::json!({
                    "deal_id": updated.id,
                    "title": updated.title,
                    "stage": updated.stage,
                    "value": updated.value,
                }),
            });
        }

        Ok(updated)
    }
}

/// 阶段变更跨入终态时对应的事件
fn closing_event(stage: Stage) -> Option<WebhookEventType> {
    match stage {
        Stage::Won => Some(WebhookEventType::DealWon),
        Stage::Lost => Some(WebhookEventType::DealLost),
        _ => None,
    }
}
