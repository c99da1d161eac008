// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Webhook实体
///
/// 表示一个Webhook端点配置，用于接收管道事件通知。
/// Webhook允许外部系统订阅交易和提案的状态变化。
/// 签名密钥在创建时写入一次，此后只被签名函数读取。
///
/// 成功/失败计数不在此实体上维护，而是从投递日志表中
/// 按需派生（见 `WebhookStats`），日志是唯一的审计事实来源。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook唯一标识符
    pub id: Uuid,
    /// 所属团队ID，用于权限隔离和归属管理
    pub team_id: Uuid,
    /// Webhook回调URL，接收通知的目标地址
    pub url: String,
    /// 签名密钥，创建后只读
    pub secret_key: String,
    /// 订阅的事件名集合（点分格式，如 `deal.won`）
    pub events: Vec<String>,
    /// 是否启用，停用的Webhook不参与分发
    pub active: bool,
    /// 最近一次触发时间
    pub last_triggered_at: Option<DateTime<Utc>>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl Webhook {
    /// 创建一个新的Webhook配置
    pub fn new(team_id: Uuid, url: String, secret_key: String, events: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            team_id,
            url,
            secret_key,
            events,
            active: true,
            last_triggered_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 判断Webhook是否订阅了给定事件
    pub fn subscribes_to(&self, event: &WebhookEventType) -> bool {
        let name = event.to_string();
        self.events.iter().any(|e| e == &name)
    }
}

/// Webhook投递统计
///
/// 从投递日志表按需聚合的派生值，不独立持久化。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookStats {
    /// 成功投递次数
    pub success_count: u64,
    /// 失败投递次数
    pub failure_count: u64,
}

/// Webhook投递日志
///
/// 一行对应一次投递尝试，仅追加、永不修改。重试产生新行，
/// 原失败行保持不变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookLog {
    /// 日志唯一标识符
    pub id: Uuid,
    /// 关联的Webhook ID
    pub webhook_id: Uuid,
    /// 所属团队ID
    pub team_id: Uuid,
    /// 事件类型（点分格式）
    pub event_type: String,
    /// 序列化后的事件负载
    pub payload: serde_json::Value,
    /// HTTP响应状态码
    pub response_status: Option<u16>,
    /// HTTP响应体
    pub response_body: Option<String>,
    /// 是否投递成功（2xx响应）
    pub success: bool,
    /// 投递耗时（毫秒）
    pub duration_ms: i64,
    /// 失败时的错误描述
    pub error_message: Option<String>,
    /// 尝试发生时间
    pub created_at: DateTime<Utc>,
}

/// Webhook事件类型枚举
///
/// 定义了管道向外部系统通报的事件分类，点分格式的
/// 线上名称用于订阅匹配和负载序列化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEventType {
    /// 交易创建，新交易进入管道时触发
    DealCreated,
    /// 交易赢单，交易进入 won 阶段时触发
    DealWon,
    /// 交易输单，交易进入 lost 阶段时触发
    DealLost,
    /// 提案签署，客户签署提案时触发
    ProposalSigned,
    /// 提案查看，客户首次查看提案时触发
    ProposalViewed,
    /// 其他事件类型，用于团队自定义订阅
    Custom(String),
}

impl fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebhookEventType::DealCreated => write!(f, "deal.created"),
            WebhookEventType::DealWon => write!(f, "deal.won"),
            WebhookEventType::DealLost => write!(f, "deal.lost"),
            WebhookEventType::ProposalSigned => write!(f, "proposal.signed"),
            WebhookEventType::ProposalViewed => write!(f, "proposal.viewed"),
            WebhookEventType::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for WebhookEventType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deal.created" => Ok(WebhookEventType::DealCreated),
            "deal.won" => Ok(WebhookEventType::DealWon),
            "deal.lost" => Ok(WebhookEventType::DealLost),
            "proposal.signed" => Ok(WebhookEventType::ProposalSigned),
            "proposal.viewed" => Ok(WebhookEventType::ProposalViewed),
            other if !other.trim().is_empty() => Ok(WebhookEventType::Custom(other.to_string())),
            _ => Err(()),
        }
    }
}

/// 投递状态枚举
///
/// 单次投递尝试在其生命周期中的状态。一次尝试只经历
/// 一跳：Pending → Success 或 Pending → Failure，均为终态；
/// 重试是显式触发的新尝试，而非同一尝试内的多步流转。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// 待投递，尝试已创建但尚未发出
    #[default]
    Pending,
    /// 投递成功，收到2xx响应
    Success,
    /// 投递失败，网络错误、超时或非2xx响应
    Failure,
}
