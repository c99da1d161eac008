// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::{HeaderName, HeaderValue};
use axum::Extension;
use axum_test::TestServer;
use dealrs::config::settings::Settings;
use dealrs::domain::services::funnel_service::FunnelPolicy;
use dealrs::domain::services::webhook_service::WebhookDeliverer;
use dealrs::infrastructure::repositories::deal_repo_impl::DealRepositoryImpl;
use dealrs::infrastructure::repositories::proposal_repo_impl::ProposalRepositoryImpl;
use dealrs::infrastructure::repositories::webhook_log_repo_impl::WebhookLogRepositoryImpl;
use dealrs::infrastructure::repositories::webhook_repo_impl::WebhookRepositoryImpl;
use dealrs::infrastructure::services::webhook_delivery_impl::HttpWebhookDeliverer;
use dealrs::presentation::routes;
use dealrs::queue::dispatch_queue::DispatchQueue;
use dealrs::workers::webhook_worker::WebhookWorker;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub team_id: Uuid,
    pub deal_repo: Arc<DealRepositoryImpl>,
    pub proposal_repo: Arc<ProposalRepositoryImpl>,
    pub webhook_repo: Arc<WebhookRepositoryImpl>,
    pub webhook_log_repo: Arc<WebhookLogRepositoryImpl>,
    pub dispatch_queue: DispatchQueue,
}

impl TestApp {
    /// 为当前测试团队构造请求头
    pub fn team_header(&self) -> (HeaderName, HeaderValue) {
        header_for(self.team_id)
    }
}

pub fn header_for(team_id: Uuid) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-team-id"),
        HeaderValue::from_str(&team_id.to_string()).unwrap(),
    )
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_options(false).await
}

/// 带有后台投递工作器的测试应用
pub async fn create_test_app_with_worker() -> TestApp {
    create_test_app_with_options(true).await
}

async fn create_test_app_with_options(start_worker: bool) -> TestApp {
    // A single pooled connection keeps every query on the same
    // in-memory SQLite database.
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).sqlx_logging(false);
    let db = Arc::new(Database::connect(opt).await.expect("connect sqlite"));

    Migrator::up(db.as_ref(), None)
        .await
        .expect("apply migrations");

    let deal_repo = Arc::new(DealRepositoryImpl::new(db.clone()));
    let proposal_repo = Arc::new(ProposalRepositoryImpl::new(db.clone()));
    let webhook_repo = Arc::new(WebhookRepositoryImpl::new(db.clone()));
    let webhook_log_repo = Arc::new(WebhookLogRepositoryImpl::new(db.clone()));

    let (dispatch_queue, dispatch_receiver) = DispatchQueue::new(64);
    let deliverer: Arc<dyn WebhookDeliverer> = Arc::new(HttpWebhookDeliverer::new("dealrs-test", 2));

    if start_worker {
        let worker = WebhookWorker::new(
            webhook_repo.clone(),
            webhook_log_repo.clone(),
            deliverer.clone(),
            dispatch_receiver,
        );
        tokio::spawn(worker.run());
    }

    let settings = Arc::new(Settings::new().expect("load settings"));

    let app = routes::routes()
        .layer(Extension(deal_repo.clone()))
        .layer(Extension(proposal_repo.clone()))
        .layer(Extension(webhook_repo.clone()))
        .layer(Extension(webhook_log_repo.clone()))
        .layer(Extension(deliverer))
        .layer(Extension(dispatch_queue.clone()))
        .layer(Extension(FunnelPolicy::default()))
        .layer(Extension(settings));

    let server = TestServer::new(app).expect("start test server");

    TestApp {
        server,
        db,
        team_id: Uuid::new_v4(),
        deal_repo,
        proposal_repo,
        webhook_repo,
        webhook_log_repo,
        dispatch_queue,
    }
}
