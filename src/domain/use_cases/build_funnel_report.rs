// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::funnel::ConversionFunnel;
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::proposal_repository::{FunnelQueryParams, ProposalRepository};
use crate::domain::services::funnel_service::{build_conversion_funnel, FunnelPolicy};
use std::sync::Arc;

/// 漏斗报表用例
///
/// 读取报表范围内的提案与查看记录快照，执行纯内存聚合。
/// 每次调用无状态。
pub struct BuildFunnelReportUseCase<P: ProposalRepository> {
    repo: Arc<P>,
    policy: FunnelPolicy,
}

impl<P: ProposalRepository> BuildFunnelReportUseCase<P> {
    pub fn new(repo: Arc<P>, policy: FunnelPolicy) -> Self {
        Self { repo, policy }
    }

    pub async fn execute(
        &self,
        params: FunnelQueryParams,
    ) -> Result<ConversionFunnel, RepositoryError> {
        let (proposals, views) = self.repo.snapshot_for_funnel(params).await?;
        Ok(build_conversion_funnel(&proposals, &views, &self.policy))
    }
}
