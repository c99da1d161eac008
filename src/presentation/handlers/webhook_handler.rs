// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::webhook_request::{CreateWebhookRequestDto, RetryWebhookRequestDto};
use crate::application::dto::webhook_response::{
    WebhookCreatedResponseDto, WebhookLogResponseDto, WebhookResponseDto,
};
use crate::domain::repositories::deal_repository::RepositoryError;
use crate::domain::repositories::webhook_log_repository::WebhookLogRepository;
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::webhook_service::WebhookDeliverer;
use crate::domain::use_cases::create_webhook::CreateWebhookUseCase;
use crate::domain::use_cases::retry_webhook::RetryWebhookUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::team_id::TeamId;
use crate::utils::validators;
use axum::extract::Path;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 单个Webhook返回的日志条数上限
const LOG_PAGE_SIZE: u64 = 50;

/// 创建Webhook订阅
///
/// 签名密钥仅在本响应中明文出现一次。
pub async fn create_webhook<R: WebhookRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<CreateWebhookRequestDto>,
) -> Result<(StatusCode, Json<WebhookCreatedResponseDto>), AppError> {
    payload.validate()?;
    validators::validate_webhook_url(&payload.url).await?;

    let use_case = CreateWebhookUseCase::new(repo);
    let webhook = use_case
        .execute(team_id, payload.url, payload.events)
        .await?;
    Ok((StatusCode::CREATED, Json(webhook.into())))
}

/// 列出团队的全部Webhook
///
/// 成功/失败计数不读取存储的计数器，而是对每个Webhook
/// 从投递日志表即时聚合。
pub async fn list_webhooks<R: WebhookRepository, L: WebhookLogRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<R>>,
    Extension(logs): Extension<Arc<L>>,
) -> Result<Json<Vec<WebhookResponseDto>>, AppError> {
    let webhooks = repo.list_by_team(team_id).await?;

    let mut out = Vec::with_capacity(webhooks.len());
    for webhook in webhooks {
        let stats = logs.stats(webhook.id).await?;
        out.push(WebhookResponseDto::from_parts(webhook, stats));
    }
    Ok(Json(out))
}

/// 删除团队的一个Webhook
pub async fn delete_webhook<R: WebhookRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<R>>,
    Path(webhook_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(webhook_id, team_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 按时间倒序列出一个Webhook的投递日志
pub async fn list_webhook_logs<R: WebhookRepository, L: WebhookLogRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<R>>,
    Extension(logs): Extension<Arc<L>>,
    Path(webhook_id): Path<Uuid>,
) -> Result<Json<Vec<WebhookLogResponseDto>>, AppError> {
    // Team scoping happens here, the log table itself is keyed by webhook
    repo.find_by_id(webhook_id)
        .await?
        .filter(|w| w.team_id == team_id)
        .ok_or(RepositoryError::NotFound)?;

    let entries = logs.list_by_webhook(webhook_id, LOG_PAGE_SIZE).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// 重试一次失败的投递
///
/// 以原始日志行的事件与负载数据发起一次新的投递尝试，
/// 追加新日志行，原行保持不变。
pub async fn retry_webhook<W: WebhookRepository, L: WebhookLogRepository>(
    TeamId(team_id): TeamId,
    Extension(webhooks): Extension<Arc<W>>,
    Extension(logs): Extension<Arc<L>>,
    Extension(deliverer): Extension<Arc<dyn WebhookDeliverer>>,
    Path(webhook_id): Path<Uuid>,
    Json(payload): Json<RetryWebhookRequestDto>,
) -> Result<Json<WebhookLogResponseDto>, AppError> {
    let use_case = RetryWebhookUseCase::new(webhooks, logs, deliverer);
    let log = use_case.execute(team_id, webhook_id, payload.log_id).await?;
    Ok(Json(log.into()))
}
