// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::webhook_service::{DeliveryOutcome, WebhookDeliverer};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

/// 签名请求头
const SIGNATURE_HEADER: &str = "X-Dealrs-Signature";
/// 事件名请求头
const EVENT_HEADER: &str = "X-Dealrs-Event";

/// Webhook投递实现
///
/// 基于reqwest的出站HTTP投递。请求体是已签名的负载字符串，
/// 签名放入签名头供订阅方重算比对。投递超时有界，迟缓的
/// 订阅端点不会无限期阻塞触发它的管道变更。
pub struct HttpWebhookDeliverer {
    /// HTTP客户端
    client: Client,
    /// 单次投递超时
    timeout: Duration,
}

impl HttpWebhookDeliverer {
    /// 创建新的Webhook投递实现
    ///
    /// # 参数
    ///
    /// * `user_agent` - 出站请求的User-Agent
    /// * `timeout_secs` - 投递超时（秒）
    pub fn new(user_agent: &str, timeout_secs: u64) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(user_agent)
                .unwrap_or(header::HeaderValue::from_static("dealrs-webhook")),
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_default();

        Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl WebhookDeliverer for HttpWebhookDeliverer {
    async fn deliver(
        &self,
        url: &str,
        event: &str,
        payload: &str,
        signature: &str,
    ) -> DeliveryOutcome {
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .header(EVENT_HEADER, event)
            .body(payload.to_string())
            .timeout(self.timeout)
            .send()
            .await;

        let duration_ms = start.elapsed().as_millis() as i64;

        match response {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                DeliveryOutcome {
                    status: Some(status.as_u16()),
                    body: Some(body),
                    error: if status.is_success() {
                        None
                    } else {
                        Some(format!("Endpoint responded with status {}", status))
                    },
                    duration_ms,
                    success: status.is_success(),
                }
            }
            Err(e) => DeliveryOutcome {
                status: None,
                body: None,
                error: Some(e.to_string()),
                duration_ms,
                success: false,
            },
        }
    }
}
