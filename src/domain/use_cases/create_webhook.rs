// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::Webhook;
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::webhook_repository::WebhookRepository;
use rand::RngCore;
use std::sync::Arc;
use uuid::Uuid;

/// 签名密钥字节长度
const SECRET_KEY_BYTES: usize = 32;

pub struct CreateWebhookUseCase<R: WebhookRepository> {
    repo: Arc<R>,
}

impl<R: WebhookRepository> CreateWebhookUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 创建Webhook订阅
    ///
    /// 签名密钥在此一次性生成并随配置写入；此后密钥只被
    /// 签名函数读取，不再变更。URL和事件列表已由调用层校验。
    pub async fn execute(
        &self,
        team_id: Uuid,
        url: String,
        events: Vec<String>,
    ) -> Result<Webhook, RepositoryError> {
        let mut key = [0u8; SECRET_KEY_BYTES];
        rand::rng().fill_bytes(&mut key);
        let secret_key = format!("whsec_{}", hex::encode(key));

        let webhook = Webhook::new(team_id, url, secret_key, events);
        self.repo.create(&webhook).await?;
        Ok(webhook)
    }
}
