// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建Webhook请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateWebhookRequestDto {
    /// 投递目标地址，必须为合法URL
    #[validate(url(message = "invalid webhook url"))]
    pub url: String,
    /// 订阅的事件类型列表
    #[validate(length(min = 1, message = "events cannot be empty"))]
    pub events: Vec<String>,
}

/// 重试Webhook投递请求数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct RetryWebhookRequestDto {
    /// 要重试的投递日志ID
    pub log_id: Uuid,
}
