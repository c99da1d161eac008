// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::deal_repo_impl::DealRepositoryImpl;
use crate::infrastructure::repositories::proposal_repo_impl::ProposalRepositoryImpl;
use crate::infrastructure::repositories::webhook_log_repo_impl::WebhookLogRepositoryImpl;
use crate::infrastructure::repositories::webhook_repo_impl::WebhookRepositoryImpl;
use crate::presentation::handlers::{
    deal_handler, funnel_handler, oauth_handler, webhook_handler,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let protected_routes = Router::new()
        .route(
            "/v1/deals",
            post(deal_handler::create_deal::<DealRepositoryImpl>)
                .get(deal_handler::list_deals::<DealRepositoryImpl>),
        )
        .route(
            "/v1/deals/{id}/stage",
            patch(deal_handler::update_deal_stage::<DealRepositoryImpl>),
        )
        .route(
            "/v1/reports/funnel",
            get(funnel_handler::funnel_report::<ProposalRepositoryImpl>),
        )
        .route(
            "/v1/webhooks",
            post(webhook_handler::create_webhook::<WebhookRepositoryImpl>)
                .get(webhook_handler::list_webhooks::<WebhookRepositoryImpl, WebhookLogRepositoryImpl>),
        )
        .route(
            "/v1/webhooks/{id}",
            delete(webhook_handler::delete_webhook::<WebhookRepositoryImpl>),
        )
        .route(
            "/v1/webhooks/{id}/logs",
            get(webhook_handler::list_webhook_logs::<WebhookRepositoryImpl, WebhookLogRepositoryImpl>),
        )
        .route(
            "/v1/webhooks/{id}/retry",
            post(webhook_handler::retry_webhook::<WebhookRepositoryImpl, WebhookLogRepositoryImpl>),
        )
        .route(
            "/v1/integrations/oauth/state",
            get(oauth_handler::issue_oauth_state),
        )
        .route(
            "/v1/integrations/oauth/state/verify",
            post(oauth_handler::verify_oauth_state),
        );

    Router::new().merge(public_routes).merge(protected_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
