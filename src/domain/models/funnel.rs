// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 转化漏斗指标
///
/// 由提案和查看记录派生的非持久化聚合结果。四个计数满足
/// 单调不增不变量 `sent >= viewed >= engaged >= signed`，
/// 百分比以 sent 为基数并收敛到 [0, 100]。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionFunnel {
    /// 已发送数量
    pub sent_count: u64,
    /// 已查看数量
    pub viewed_count: u64,
    /// 已参与数量
    pub engaged_count: u64,
    /// 已签署数量
    pub signed_count: u64,
    /// 已发送百分比，sent > 0 时恒为 100
    pub sent_percent: u8,
    /// 已查看百分比
    pub viewed_percent: u8,
    /// 已参与百分比
    pub engaged_percent: u8,
    /// 已签署百分比
    pub signed_percent: u8,
    /// 查看段展示宽度因子，下限 0.32
    pub viewed_flex: f64,
    /// 参与段展示宽度因子，下限 0.28
    pub engaged_flex: f64,
    /// 签署段展示宽度因子，下限 0.22
    pub signed_flex: f64,
}

impl ConversionFunnel {
    /// 空漏斗，所有计数与百分比为零、宽度因子取各自下限
    pub fn empty() -> Self {
        Self {
            sent_count: 0,
            viewed_count: 0,
            engaged_count: 0,
            signed_count: 0,
            sent_percent: 0,
            viewed_percent: 0,
            engaged_percent: 0,
            signed_percent: 0,
            viewed_flex: crate::domain::services::funnel_service::VIEWED_FLEX_FLOOR,
            engaged_flex: crate::domain::services::funnel_service::ENGAGED_FLEX_FLOOR,
            signed_flex: crate::domain::services::funnel_service::SIGNED_FLEX_FLOOR,
        }
    }
}
