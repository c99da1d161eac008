// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::deal::Deal;
use crate::domain::models::stage::Stage;
use crate::domain::repositories::deal_repository::{DealRepository, RepositoryError};
use crate::infrastructure::database::entities::deal;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 交易仓库实现
#[derive(Clone)]
pub struct DealRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl DealRepositoryImpl {
    /// 创建新的交易仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DealRepository for DealRepositoryImpl {
    async fn create(&self, deal: &Deal) -> Result<Deal, RepositoryError> {
        let active_model = deal::ActiveModel {
            id: Set(deal.id),
            team_id: Set(deal.team_id),
            title: Set(deal.title.clone()),
            stage: Set(deal.stage.db_value().to_string()),
            value: Set(deal.value),
            contact_id: Set(deal.contact_id),
            owner_id: Set(deal.owner_id),
            created_at: Set(deal.created_at.into()),
            updated_at: Set(deal.updated_at.into()),
        };

        deal::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(deal.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Deal>, RepositoryError> {
        let model = deal::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Deal>, RepositoryError> {
        let models = deal::Entity::find()
            .filter(deal::Column::TeamId.eq(team_id))
            .order_by_desc(deal::Column::UpdatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_stage(
        &self,
        id: Uuid,
        team_id: Uuid,
        stage: Stage,
        updated_at: DateTime<Utc>,
    ) -> Result<Deal, RepositoryError> {
        let mut active: deal::ActiveModel = deal::Entity::find_by_id(id)
            .filter(deal::Column::TeamId.eq(team_id))
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        active.stage = Set(stage.db_value().to_string());
        active.updated_at = Set(updated_at.into());

        let updated_model = active.update(self.db.as_ref()).await?;

        Ok(updated_model.into())
    }
}

impl From<deal::Model> for Deal {
    fn from(model: deal::Model) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            title: model.title,
            // Legacy rows may hold alias values; reads always normalize
            stage: Stage::normalize(&model.stage),
            value: model.value,
            contact_id: model.contact_id,
            owner_id: model.owner_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
