// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::deal_request::{CreateDealRequestDto, UpdateDealStageRequestDto};
use crate::application::dto::deal_response::DealResponseDto;
use crate::domain::repositories::deal_repository::DealRepository;
use crate::domain::use_cases::create_deal::CreateDealUseCase;
use crate::domain::use_cases::update_deal_stage::UpdateDealStageUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::team_id::TeamId;
use crate::queue::dispatch_queue::DispatchQueue;
use axum::extract::Path;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 创建交易
///
/// 初始阶段经别名归一化，未知或缺省归入 `lead`；
/// 插入成功后异步分发 `deal.created` 事件。
pub async fn create_deal<R: DealRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<R>>,
    Extension(queue): Extension<DispatchQueue>,
    Json(payload): Json<CreateDealRequestDto>,
) -> Result<(StatusCode, Json<DealResponseDto>), AppError> {
    payload.validate()?;

    let use_case = CreateDealUseCase::new(repo, queue);
    let deal = use_case
        .execute(
            team_id,
            payload.title,
            payload.stage.as_deref(),
            payload.value,
            payload.contact_id,
            payload.owner_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(deal.into())))
}

/// 列出团队的全部交易
pub async fn list_deals<R: DealRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<DealResponseDto>>, AppError> {
    let deals = repo.list_by_team(team_id).await?;
    Ok(Json(deals.into_iter().map(Into::into).collect()))
}

/// 更新交易阶段
///
/// 持久化成功后，进入 `won`/`lost` 的交易会异步分发
/// 对应的关单事件；同阶段更新是无操作。
pub async fn update_deal_stage<R: DealRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<R>>,
    Extension(queue): Extension<DispatchQueue>,
    Path(deal_id): Path<Uuid>,
    Json(payload): Json<UpdateDealStageRequestDto>,
) -> Result<Json<DealResponseDto>, AppError> {
    payload.validate()?;

    let use_case = UpdateDealStageUseCase::new(repo, queue);
    let deal = use_case.execute(team_id, deal_id, &payload.stage).await?;
    Ok(Json(deal.into()))
}
