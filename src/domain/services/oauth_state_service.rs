// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::oauth_state::OAuthStateClaims;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::distr::Alphanumeric;
use rand::Rng;
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// 随机数长度
const NONCE_LEN: usize = 24;

/// OAuth状态令牌错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OAuthStateError {
    /// 令牌格式错误
    #[error("Malformed state token")]
    Malformed,
    /// 签名校验失败
    #[error("State token signature mismatch")]
    SignatureMismatch,
    /// 令牌已过期
    #[error("State token expired")]
    Expired,
}

/// 签发OAuth状态令牌
///
/// 令牌形如 `base64url(claims-json).hex(hmac-sha256)`，MAC覆盖
/// base64段的精确字节。令牌不落库，仅凭共享密钥即可校验，
/// 用于保护集成OAuth重定向免受CSRF和篡改。
///
/// # 参数
///
/// * `secret` - 共享签名密钥
/// * `team_id` - 发起授权的团队ID
/// * `provider` - 集成提供方标识
/// * `now` - 签发时间
///
/// # 返回值
///
/// 返回编码后的状态令牌
pub fn issue_state_token(
    secret: &str,
    team_id: Uuid,
    provider: &str,
    now: DateTime<Utc>,
) -> String {
    let nonce: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect();

    let claims = OAuthStateClaims {
        team_id,
        provider: provider.to_string(),
        nonce,
        issued_at: now,
    };

    // Claims of this shape always serialize
    let json = serde_json::to_vec(&claims).unwrap_or_default();
    let encoded = URL_SAFE_NO_PAD.encode(json);
    let signature = sign(secret, &encoded);
    format!("{encoded}.{signature}")
}

/// 校验OAuth状态令牌
///
/// 重算MAC并做常数时间比对，拒绝格式错误、签名不符和
/// 超过最大时效的令牌。无状态：不依赖任何持久化查询。
///
/// # 参数
///
/// * `secret` - 共享签名密钥
/// * `token` - 待校验的状态令牌
/// * `now` - 当前时间
/// * `max_age` - 自签发起的最大有效时长
///
/// # 返回值
///
/// * `Ok(OAuthStateClaims)` - 校验通过，返回解码后的声明
/// * `Err(OAuthStateError)` - 校验失败
pub fn verify_state_token(
    secret: &str,
    token: &str,
    now: DateTime<Utc>,
    max_age: Duration,
) -> Result<OAuthStateClaims, OAuthStateError> {
    let (encoded, signature_hex) = token.split_once('.').ok_or(OAuthStateError::Malformed)?;

    let expected = hex::decode(signature_hex).map_err(|_| OAuthStateError::Malformed)?;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(encoded.as_bytes());
    mac.verify_slice(&expected)
        .map_err(|_| OAuthStateError::SignatureMismatch)?;

    let json = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| OAuthStateError::Malformed)?;
    let claims: OAuthStateClaims =
        serde_json::from_slice(&json).map_err(|_| OAuthStateError::Malformed)?;

    if now - claims.issued_at > max_age {
        return Err(OAuthStateError::Expired);
    }

    Ok(claims)
}

fn sign(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
#[path = "oauth_state_service_test.rs"]
mod tests;
