// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stage::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 交易实体
///
/// 表示销售管道中的一笔交易。交易由管道入口操作创建，
/// 其阶段通过看板拖拽或编程式阶段更新改变；删除由外部
/// 协作方负责，本核心不处理。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// 交易唯一标识符
    pub id: Uuid,
    /// 所属团队ID，用于权限隔离和归属管理
    pub team_id: Uuid,
    /// 交易标题
    pub title: String,
    /// 当前管道阶段
    pub stage: Stage,
    /// 交易金额（最小货币单位），可选
    pub value: Option<i64>,
    /// 关联联系人ID
    pub contact_id: Option<Uuid>,
    /// 负责人ID
    pub owner_id: Option<Uuid>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间，阶段变更时随之更新
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    /// 创建一笔新交易
    ///
    /// 新交易从 `Stage::Lead` 进入管道。
    pub fn new(team_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            team_id,
            title,
            stage: Stage::default(),
            value: None,
            contact_id: None,
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}
