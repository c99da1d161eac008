// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::oauth_state_request::{
    IssueOAuthStateQueryDto, OAuthStateResponseDto, VerifyOAuthStateRequestDto,
    VerifyOAuthStateResponseDto,
};
use crate::config::settings::Settings;
use crate::domain::services::oauth_state_service;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::team_id::TeamId;
use axum::extract::Query;
use axum::{Extension, Json};
use chrono::{Duration, Utc};
use std::sync::Arc;
use validator::Validate;

/// 签发OAuth状态令牌
///
/// 令牌绑定团队与提供方，作为外部OAuth流程的 `state` 参数。
pub async fn issue_oauth_state(
    TeamId(team_id): TeamId,
    Extension(settings): Extension<Arc<Settings>>,
    Query(query): Query<IssueOAuthStateQueryDto>,
) -> Result<Json<OAuthStateResponseDto>, AppError> {
    query.validate()?;

    let state = oauth_state_service::issue_state_token(
        &settings.oauth.state_secret,
        team_id,
        &query.provider,
        Utc::now(),
    );
    Ok(Json(OAuthStateResponseDto { state }))
}

/// 校验OAuth回调携带的状态令牌
///
/// 签名不匹配、格式非法或超过有效期均返回400。
pub async fn verify_oauth_state(
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<VerifyOAuthStateRequestDto>,
) -> Result<Json<VerifyOAuthStateResponseDto>, AppError> {
    payload.validate()?;

    let claims = oauth_state_service::verify_state_token(
        &settings.oauth.state_secret,
        &payload.state,
        Utc::now(),
        Duration::seconds(settings.oauth.state_max_age_seconds),
    )?;
    Ok(Json(claims.into()))
}
