// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::oauth_state::OAuthStateClaims;

/// OAuth状态令牌签发查询参数
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct IssueOAuthStateQueryDto {
    /// 目标OAuth提供方标识（如 `hubspot`）
    #[validate(length(min = 1, message = "provider cannot be empty"))]
    pub provider: String,
}

/// OAuth状态令牌签发响应
#[derive(Debug, Deserialize, Serialize)]
pub struct OAuthStateResponseDto {
    /// 签名后的状态令牌，作为OAuth流程的 `state` 参数
    pub state: String,
}

/// OAuth状态令牌校验请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct VerifyOAuthStateRequestDto {
    /// 回调中携带的状态令牌
    #[validate(length(min = 1, message = "state cannot be empty"))]
    pub state: String,
}

/// OAuth状态令牌校验响应
#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyOAuthStateResponseDto {
    /// 令牌中的团队ID
    pub team_id: Uuid,
    /// 令牌中的提供方标识
    pub provider: String,
    /// 令牌签发时间
    pub issued_at: DateTime<Utc>,
}

impl From<OAuthStateClaims> for VerifyOAuthStateResponseDto {
    fn from(claims: OAuthStateClaims) -> Self {
        Self {
            team_id: claims.team_id,
            provider: claims.provider,
            issued_at: claims.issued_at,
        }
    }
}
