// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 提案实体
///
/// 表示发送给客户的一份提案。提案沿固定生命周期推进：
/// Draft → Pending → Sent → Viewed → Signed（或 Expired），
/// 转化漏斗只关心 sent 类、viewed 类和 signed 状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// 提案唯一标识符
    pub id: Uuid,
    /// 所属团队ID，用于权限隔离和归属管理
    pub team_id: Uuid,
    /// 关联交易ID，可选
    pub deal_id: Option<Uuid>,
    /// 提案状态
    pub status: ProposalStatus,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 发送时间
    pub sent_at: Option<DateTime<Utc>>,
    /// 签署时间
    pub signed_at: Option<DateTime<Utc>>,
}

/// 提案查看记录
///
/// 一条记录对应客户的一次提案查看，携带停留时长作为
/// 参与度信号。一份提案可以有零条或多条查看记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalView {
    /// 查看记录唯一标识符
    pub id: Uuid,
    /// 被查看的提案ID
    pub proposal_id: Uuid,
    /// 查看停留时长（秒）
    pub duration_seconds: i64,
    /// 查看发生时间
    pub viewed_at: DateTime<Utc>,
}

/// 提案状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// 草稿，尚未发出
    #[default]
    Draft,
    /// 待发送，已排入发送队列
    Pending,
    /// 已发送给客户
    Sent,
    /// 客户已查看
    Viewed,
    /// 客户已签署
    Signed,
    /// 已过期
    Expired,
}

impl ProposalStatus {
    /// 是否计入漏斗的 sent 统计
    pub fn is_sent_like(&self) -> bool {
        matches!(
            self,
            ProposalStatus::Sent
                | ProposalStatus::Pending
                | ProposalStatus::Viewed
                | ProposalStatus::Signed
        )
    }

    /// 是否计入漏斗的 viewed 统计
    pub fn is_viewed_like(&self) -> bool {
        matches!(self, ProposalStatus::Viewed | ProposalStatus::Signed)
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProposalStatus::Draft => write!(f, "draft"),
            ProposalStatus::Pending => write!(f, "pending"),
            ProposalStatus::Sent => write!(f, "sent"),
            ProposalStatus::Viewed => write!(f, "viewed"),
            ProposalStatus::Signed => write!(f, "signed"),
            ProposalStatus::Expired => write!(f, "expired"),
        }
    }
}

impl FromStr for ProposalStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProposalStatus::Draft),
            "pending" => Ok(ProposalStatus::Pending),
            "sent" => Ok(ProposalStatus::Sent),
            "viewed" => Ok(ProposalStatus::Viewed),
            "signed" => Ok(ProposalStatus::Signed),
            "expired" => Ok(ProposalStatus::Expired),
            _ => Err(()),
        }
    }
}
