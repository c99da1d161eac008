// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::proposal::{Proposal, ProposalStatus, ProposalView};
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::proposal_repository::{FunnelQueryParams, ProposalRepository};
use crate::infrastructure::database::entities::{proposal, proposal_view};
use async_trait::async_trait;
use sea_orm::*;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// 提案仓库实现
#[derive(Clone)]
pub struct ProposalRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ProposalRepositoryImpl {
    /// 创建新的提案仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProposalRepository for ProposalRepositoryImpl {
    async fn create(&self, proposal: &Proposal) -> Result<Proposal, RepositoryError> {
        let active_model = proposal::ActiveModel {
            id: Set(proposal.id),
            team_id: Set(proposal.team_id),
            deal_id: Set(proposal.deal_id),
            status: Set(proposal.status.to_string()),
            created_at: Set(proposal.created_at.into()),
            sent_at: Set(proposal.sent_at.map(Into::into)),
            signed_at: Set(proposal.signed_at.map(Into::into)),
        };

        proposal::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(proposal.clone())
    }

    async fn record_view(&self, view: &ProposalView) -> Result<ProposalView, RepositoryError> {
        let active_model = proposal_view::ActiveModel {
            id: Set(view.id),
            proposal_id: Set(view.proposal_id),
            duration_seconds: Set(view.duration_seconds),
            viewed_at: Set(view.viewed_at.into()),
        };

        proposal_view::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(view.clone())
    }

    async fn snapshot_for_funnel(
        &self,
        params: FunnelQueryParams,
    ) -> Result<(Vec<Proposal>, Vec<ProposalView>), RepositoryError> {
        let mut query = proposal::Entity::find().filter(proposal::Column::TeamId.eq(params.team_id));

        if let Some(after) = params.created_after {
            query = query.filter(proposal::Column::CreatedAt.gte(after));
        }
        if let Some(before) = params.created_before {
            query = query.filter(proposal::Column::CreatedAt.lte(before));
        }

        let proposal_models = query.all(self.db.as_ref()).await?;

        let proposal_ids: Vec<Uuid> = proposal_models.iter().map(|p| p.id).collect();
        let view_models = if proposal_ids.is_empty() {
            Vec::new()
        } else {
            proposal_view::Entity::find()
                .filter(proposal_view::Column::ProposalId.is_in(proposal_ids))
                .all(self.db.as_ref())
                .await?
        };

        let proposals = proposal_models.into_iter().map(Into::into).collect();
        let views = view_models.into_iter().map(Into::into).collect();

        Ok((proposals, views))
    }
}

impl From<proposal::Model> for Proposal {
    fn from(model: proposal::Model) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            deal_id: model.deal_id,
            // Unknown status strings land on Draft and count toward no funnel level
            status: ProposalStatus::from_str(&model.status).unwrap_or_default(),
            created_at: model.created_at.into(),
            sent_at: model.sent_at.map(Into::into),
            signed_at: model.signed_at.map(Into::into),
        }
    }
}

impl From<proposal_view::Model> for ProposalView {
    fn from(model: proposal_view::Model) -> Self {
        Self {
            id: model.id,
            proposal_id: model.proposal_id,
            duration_seconds: model.duration_seconds,
            viewed_at: model.viewed_at.into(),
        }
    }
}
