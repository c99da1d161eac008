// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 漏斗报表查询参数
///
/// 两个时间边界均可选，缺省时统计团队全部提案
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FunnelReportQueryDto {
    /// 仅统计该时间之后创建的提案
    pub created_after: Option<DateTime<Utc>>,
    /// 仅统计该时间之前创建的提案
    pub created_before: Option<DateTime<Utc>>,
}
