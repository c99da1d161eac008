// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::deal::Deal;
use crate::domain::models::stage::Stage;
use crate::domain::models::webhook::WebhookEventType;
use crate::domain::repositories::deal_repository::{DealRepository, RepositoryError};
use crate::queue::dispatch_queue::{DispatchQueue, DispatchRequest};
use std::sync::Arc;
use uuid::Uuid;

/// 交易创建用例
///
/// 新交易进入管道时对初始阶段做别名归一化，缺省或无法
/// 识别时落入 `lead`；插入成功后入队 `deal.created` 事件分发。
pub struct CreateDealUseCase<R: DealRepository> {
    repo: Arc<R>,
    dispatch_queue: DispatchQueue,
}

impl<R: DealRepository> CreateDealUseCase<R> {
    pub fn new(repo: Arc<R>, dispatch_queue: DispatchQueue) -> Self {
        Self {
            repo,
            dispatch_queue,
        }
    }

    pub async fn execute(
        &self,
        team_id: Uuid,
        title: String,
        stage: Option<&str>,
        value: Option<i64>,
        contact_id: Option<Uuid>,
        owner_id: Option<Uuid>,
    ) -> Result<Deal, RepositoryError> {
        let mut deal = Deal::new(team_id, title);
        deal.stage = stage.map(Stage::normalize).unwrap_or_default();
        deal.value = value;
        deal.contact_id = contact_id;
        deal.owner_id = owner_id;

        let deal = self.repo.create(&deal).await?;

        // Enqueue only after the insert is durable
        self.dispatch_queue.enqueue(DispatchRequest {
            team_id,
            event: WebhookEventType::DealCreated,
            data: serde_json::json!({
                "deal_id": deal.id,
                "title": deal.title,
                "stage": deal.stage,
                "value": deal.value,
            }),
        });

        Ok(deal)
    }
}
