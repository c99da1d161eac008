// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{Webhook, WebhookEventType};
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::infrastructure::database::entities::webhook;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// Webhook仓库实现
#[derive(Clone)]
pub struct WebhookRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl WebhookRepositoryImpl {
    /// 创建新的Webhook仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebhookRepository for WebhookRepositoryImpl {
    async fn create(&self, webhook: &Webhook) -> Result<Webhook, RepositoryError> {
        let active_model = webhook::ActiveModel {
            id: Set(webhook.id),
            team_id: Set(webhook.team_id),
            url: Set(webhook.url.clone()),
            secret_key: Set(webhook.secret_key.clone()),
            events: Set(serde_json::to_value(&webhook.events)
                .unwrap_or(serde_json::Value::Array(Vec::new()))),
            active: Set(webhook.active),
            last_triggered_at: Set(webhook.last_triggered_at.map(Into::into)),
            created_at: Set(webhook.created_at.into()),
            updated_at: Set(webhook.updated_at.into()),
        };

        webhook::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(webhook.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Webhook>, RepositoryError> {
        let model = webhook::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Webhook>, RepositoryError> {
        let models = webhook::Entity::find()
            .filter(webhook::Column::TeamId.eq(team_id))
            .order_by_asc(webhook::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_subscribed(
        &self,
        team_id: Uuid,
        event: &WebhookEventType,
    ) -> Result<Vec<Webhook>, RepositoryError> {
        let models = webhook::Entity::find()
            .filter(webhook::Column::TeamId.eq(team_id))
            .filter(webhook::Column::Active.eq(true))
            .all(self.db.as_ref())
            .await?;

        // Event-name matching against the JSON events array happens in
        // memory to stay portable across backends
        let subscribed = models
            .into_iter()
            .map(Webhook::from)
            .filter(|webhook| webhook.subscribes_to(event))
            .collect();

        Ok(subscribed)
    }

    async fn touch_last_triggered(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut active: webhook::ActiveModel = webhook::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        active.last_triggered_at = Set(Some(at.into()));
        active.updated_at = Set(at.into());
        active.update(self.db.as_ref()).await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, team_id: Uuid) -> Result<(), RepositoryError> {
        let result = webhook::Entity::delete_many()
            .filter(webhook::Column::Id.eq(id))
            .filter(webhook::Column::TeamId.eq(team_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl From<webhook::Model> for Webhook {
    fn from(model: webhook::Model) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            url: model.url,
            secret_key: model.secret_key,
            events: serde_json::from_value(model.events).unwrap_or_default(),
            active: model.active,
            last_triggered_at: model.last_triggered_at.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
