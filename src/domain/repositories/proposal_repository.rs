// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::deal_repository::RepositoryError;
use crate::domain::models::proposal::{Proposal, ProposalView};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 漏斗报表查询参数
#[derive(Debug, Default, Clone)]
pub struct FunnelQueryParams {
    pub team_id: Uuid,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

/// 提案仓库特质
///
/// 定义提案数据访问接口。漏斗聚合只消费已取出的内存快照，
/// 取数职责归于本接口的实现方。
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// 创建提案
    async fn create(&self, proposal: &Proposal) -> Result<Proposal, RepositoryError>;
    /// 记录一次提案查看
    async fn record_view(&self, view: &ProposalView) -> Result<ProposalView, RepositoryError>;
    /// 读取报表范围内的提案与查看记录快照
    async fn snapshot_for_funnel(
        &self,
        params: FunnelQueryParams,
    ) -> Result<(Vec<Proposal>, Vec<ProposalView>), RepositoryError>;
}
