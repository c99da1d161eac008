// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Webhook事件负载
///
/// 投递给订阅方的请求体结构，字段按声明顺序序列化，
/// 保证相同输入产生逐字节相同的JSON。
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    /// 事件名（点分格式）
    event: &'a str,
    /// 事件数据
    data: &'a serde_json::Value,
    /// 发送时间（ISO 8601）
    #[serde(rename = "sentAt")]
    sent_at: DateTime<Utc>,
}

/// 构建Webhook事件负载
///
/// 对 `{event, data, sentAt}` 做确定性JSON序列化。
/// 纯函数：相同输入必然产生相同的负载字符串。
///
/// # 参数
///
/// * `event` - 事件名
/// * `data` - 事件数据
/// * `sent_at` - 发送时间
///
/// # 返回值
///
/// 返回序列化后的负载字符串
pub fn build_webhook_payload(
    event: &str,
    data: &serde_json::Value,
    sent_at: DateTime<Utc>,
) -> String {
    let payload = WebhookPayload {
        event,
        data,
        sent_at,
    };
    // Serialization of this shape cannot fail
    serde_json::to_string(&payload).unwrap_or_default()
}

/// 构建Webhook签名
///
/// 对负载的精确字节计算 HMAC-SHA256，输出64字符小写十六进制。
/// 纯函数且确定：相同输入产生相同签名，负载任一字节变化都会
/// 以压倒性概率改变签名，订阅方据此重算并比对。
///
/// # 参数
///
/// * `secret` - Webhook签名密钥
/// * `payload` - 负载字符串
///
/// # 返回值
///
/// 返回十六进制签名
pub fn build_webhook_signature(secret: &str, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// 单次投递尝试的结果
///
/// 投递失败是值而不是错误：网络故障、超时和非2xx响应
/// 都以 `success = false` 的结果返回，绝不向触发投递的
/// 管道变更抛出异常。
#[derive(Debug, Clone, Default)]
pub struct DeliveryOutcome {
    /// HTTP响应状态码，网络层失败时为空
    pub status: Option<u16>,
    /// HTTP响应体
    pub body: Option<String>,
    /// 失败时的错误描述
    pub error: Option<String>,
    /// 投递耗时（毫秒）
    pub duration_ms: i64,
    /// 是否成功（2xx响应）
    pub success: bool,
}

/// Webhook投递特质
///
/// 定义签名请求的出站HTTP投递接口，由基础设施层实现。
#[async_trait]
pub trait WebhookDeliverer: Send + Sync {
    /// 投递一个已签名的负载
    ///
    /// # 参数
    ///
    /// * `url` - 目标地址
    /// * `event` - 事件名，置入事件头
    /// * `payload` - 负载字符串，作为请求体
    /// * `signature` - 十六进制签名，置入签名头
    ///
    /// # 返回值
    ///
    /// 返回投递结果，失败同样以结果值表达
    async fn deliver(
        &self,
        url: &str,
        event: &str,
        payload: &str,
        signature: &str,
    ) -> DeliveryOutcome;
}

#[cfg(test)]
#[path = "webhook_service_test.rs"]
mod tests;
