// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::webhook::{Webhook, WebhookLog, WebhookStats};

/// Webhook响应数据传输对象
///
/// 签名密钥不在此结构中出现，仅在创建成功时通过
/// `WebhookCreatedResponseDto` 返回一次。
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookResponseDto {
    /// Webhook ID
    pub id: Uuid,
    /// 投递目标地址
    pub url: String,
    /// 订阅的事件类型列表
    pub events: Vec<String>,
    /// 是否启用
    pub active: bool,
    /// 成功投递次数（从投递日志派生）
    pub success_count: u64,
    /// 失败投递次数（从投递日志派生）
    pub failure_count: u64,
    /// 最近一次触发时间
    pub last_triggered_at: Option<DateTime<Utc>>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl WebhookResponseDto {
    /// 组合Webhook配置与其派生统计
    pub fn from_parts(webhook: Webhook, stats: WebhookStats) -> Self {
        Self {
            id: webhook.id,
            url: webhook.url,
            events: webhook.events,
            active: webhook.active,
            success_count: stats.success_count,
            failure_count: stats.failure_count,
            last_triggered_at: webhook.last_triggered_at,
            created_at: webhook.created_at,
        }
    }
}

/// Webhook创建响应数据传输对象
///
/// 唯一一次明文返回签名密钥的位置
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookCreatedResponseDto {
    /// Webhook ID
    pub id: Uuid,
    /// 投递目标地址
    pub url: String,
    /// 订阅的事件类型列表
    pub events: Vec<String>,
    /// 签名密钥，调用方需立即保存
    pub secret_key: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl From<Webhook> for WebhookCreatedResponseDto {
    fn from(webhook: Webhook) -> Self {
        Self {
            id: webhook.id,
            url: webhook.url,
            events: webhook.events,
            secret_key: webhook.secret_key,
            created_at: webhook.created_at,
        }
    }
}

/// Webhook投递日志响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookLogResponseDto {
    /// 日志ID
    pub id: Uuid,
    /// 事件类型
    pub event_type: String,
    /// HTTP响应状态码
    pub response_status: Option<u16>,
    /// 是否投递成功
    pub success: bool,
    /// 投递耗时（毫秒）
    pub duration_ms: i64,
    /// 失败时的错误描述
    pub error_message: Option<String>,
    /// 尝试发生时间
    pub created_at: DateTime<Utc>,
}

impl From<WebhookLog> for WebhookLogResponseDto {
    fn from(log: WebhookLog) -> Self {
        Self {
            id: log.id,
            event_type: log.event_type,
            response_status: log.response_status,
            success: log.success,
            duration_ms: log.duration_ms,
            error_message: log.error_message,
            created_at: log.created_at,
        }
    }
}
