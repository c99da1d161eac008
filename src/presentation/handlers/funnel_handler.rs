// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::funnel_request::FunnelReportQueryDto;
use crate::domain::models::funnel::ConversionFunnel;
use crate::domain::repositories::proposal_repository::{FunnelQueryParams, ProposalRepository};
use crate::domain::services::funnel_service::FunnelPolicy;
use crate::domain::use_cases::build_funnel_report::BuildFunnelReportUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::team_id::TeamId;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// 生成转化漏斗报表
///
/// 对查询范围内的提案与查看记录做一次内存聚合，
/// 返回四级计数、百分比与展示宽度因子。
pub async fn funnel_report<P: ProposalRepository>(
    TeamId(team_id): TeamId,
    Extension(repo): Extension<Arc<P>>,
    Extension(policy): Extension<FunnelPolicy>,
    Query(query): Query<FunnelReportQueryDto>,
) -> Result<Json<ConversionFunnel>, AppError> {
    let use_case = BuildFunnelReportUseCase::new(repo, policy);
    let funnel = use_case
        .execute(FunnelQueryParams {
            team_id,
            created_after: query.created_after,
            created_before: query.created_before,
        })
        .await?;
    Ok(Json(funnel))
}
