// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::deal::Deal;

/// 交易响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct DealResponseDto {
    /// 交易ID
    pub id: Uuid,
    /// 交易标题
    pub title: String,
    /// 当前管道阶段（规范名）
    pub stage: String,
    /// 交易金额（最小货币单位）
    pub value: Option<i64>,
    /// 关联联系人ID
    pub contact_id: Option<Uuid>,
    /// 负责人ID
    pub owner_id: Option<Uuid>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl From<Deal> for DealResponseDto {
    fn from(deal: Deal) -> Self {
        Self {
            id: deal.id,
            title: deal.title,
            stage: deal.stage.db_value().to_string(),
            value: deal.value,
            contact_id: deal.contact_id,
            owner_id: deal.owner_id,
            created_at: deal.created_at,
            updated_at: deal.updated_at,
        }
    }
}
