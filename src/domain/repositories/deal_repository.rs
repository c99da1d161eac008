// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::deal::Deal;
use crate::domain::models::stage::Stage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 交易仓库特质
///
/// 定义交易数据访问接口
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// 创建新交易
    async fn create(&self, deal: &Deal) -> Result<Deal, RepositoryError>;
    /// 根据ID查找交易
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Deal>, RepositoryError>;
    /// 列出团队的全部交易
    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Deal>, RepositoryError>;
    /// 更新交易阶段，返回更新后的交易
    async fn update_stage(
        &self,
        id: Uuid,
        team_id: Uuid,
        stage: Stage,
        updated_at: DateTime<Utc>,
    ) -> Result<Deal, RepositoryError>;
}
