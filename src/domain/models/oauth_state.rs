// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// OAuth状态令牌声明
///
/// 集成OAuth重定向中携带的短时效声明，用于防护CSRF和篡改。
/// 令牌不落库，仅凭令牌内容加共享密钥即可校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthStateClaims {
    /// 发起授权的团队ID
    pub team_id: Uuid,
    /// 集成提供方标识（如 `slack`、`hubspot`）
    pub provider: String,
    /// 随机数，保证同一团队同一提供方的令牌互不相同
    pub nonce: String,
    /// 签发时间，用于过期校验
    pub issued_at: DateTime<Utc>,
}
