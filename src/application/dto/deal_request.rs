// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建交易请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateDealRequestDto {
    /// 交易标题
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    /// 初始阶段，缺省或未知时归入 lead
    pub stage: Option<String>,
    /// 交易金额（最小货币单位）
    pub value: Option<i64>,
    /// 关联联系人ID
    pub contact_id: Option<Uuid>,
    /// 负责人ID
    pub owner_id: Option<Uuid>,
}

/// 更新交易阶段请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateDealStageRequestDto {
    /// 目标阶段，接受规范名或别名
    #[validate(length(min = 1, message = "stage cannot be empty"))]
    pub stage: String,
}
