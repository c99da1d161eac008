// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、Webhook投递、漏斗策略和OAuth等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// Webhook投递配置
    pub webhook: WebhookSettings,
    /// 漏斗聚合策略配置
    pub funnel: FunnelSettings,
    /// OAuth状态令牌配置
    pub oauth: OAuthSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 是否记录SQL语句日志
    pub sqlx_logging: Option<bool>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Webhook投递配置设置
#[derive(Debug, Deserialize)]
pub struct WebhookSettings {
    /// 出站请求的User-Agent头
    pub user_agent: String,
    /// 单次投递超时时间（秒）
    pub delivery_timeout_secs: u64,
    /// 分发队列容量，满载时丢弃新事件
    pub queue_capacity: usize,
}

/// 漏斗聚合策略配置设置
#[derive(Debug, Deserialize)]
pub struct FunnelSettings {
    /// 参与判定阈值（秒）
    pub engaged_threshold_seconds: i64,
    /// 已签署的提案是否无条件计入参与
    pub signed_proposals_are_always_engaged: bool,
}

/// OAuth状态令牌配置设置
#[derive(Debug, Deserialize)]
pub struct OAuthSettings {
    /// 状态令牌签名密钥
    pub state_secret: String,
    /// 状态令牌最大有效时长（秒）
    pub state_max_age_seconds: i64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.url", "sqlite::memory:")?
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.sqlx_logging", false)?
            // Default Webhook delivery settings
            .set_default("webhook.user_agent", "dealrs-webhook/1.0")?
            .set_default("webhook.delivery_timeout_secs", 10)?
            .set_default("webhook.queue_capacity", 1024)?
            // Default funnel policy settings
            .set_default("funnel.engaged_threshold_seconds", 60)?
            .set_default("funnel.signed_proposals_are_always_engaged", true)?
            // Default OAuth state settings
            .set_default("oauth.state_secret", "change-me")?
            .set_default("oauth.state_max_age_seconds", 600)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DEALRS").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 从当前配置构造漏斗策略
    pub fn funnel_policy(&self) -> crate::domain::services::funnel_service::FunnelPolicy {
        crate::domain::services::funnel_service::FunnelPolicy {
            engaged_threshold_seconds: self.funnel.engaged_threshold_seconds,
            signed_proposals_are_always_engaged: self.funnel.signed_proposals_are_always_engaged,
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
