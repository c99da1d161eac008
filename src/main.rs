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

use axum::Extension;
use dealrs::config::settings::Settings;
use dealrs::domain::services::webhook_service::WebhookDeliverer;
use dealrs::infrastructure::database::connection;
use dealrs::infrastructure::repositories::deal_repo_impl::DealRepositoryImpl;
use dealrs::infrastructure::repositories::proposal_repo_impl::ProposalRepositoryImpl;
use dealrs::infrastructure::repositories::webhook_log_repo_impl::WebhookLogRepositoryImpl;
use dealrs::infrastructure::repositories::webhook_repo_impl::WebhookRepositoryImpl;
use dealrs::infrastructure::services::webhook_delivery_impl::HttpWebhookDeliverer;
use dealrs::presentation::routes;
use dealrs::queue::dispatch_queue::DispatchQueue;
use dealrs::utils::telemetry;
use dealrs::workers::manager::WorkerManager;
use dealrs::workers::webhook_worker::WebhookWorker;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting dealrs...");

    // Initialize Prometheus Metrics
    dealrs::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize repositories
    let deal_repo = Arc::new(DealRepositoryImpl::new(db.clone()));
    let proposal_repo = Arc::new(ProposalRepositoryImpl::new(db.clone()));
    let webhook_repo = Arc::new(WebhookRepositoryImpl::new(db.clone()));
    let webhook_log_repo = Arc::new(WebhookLogRepositoryImpl::new(db.clone()));

    // 5. Initialize dispatch queue and outbound deliverer
    let (dispatch_queue, dispatch_receiver) = DispatchQueue::new(settings.webhook.queue_capacity);
    let deliverer: Arc<dyn WebhookDeliverer> = Arc::new(HttpWebhookDeliverer::new(
        &settings.webhook.user_agent,
        settings.webhook.delivery_timeout_secs,
    ));

    // 6. Start the webhook worker
    let worker = WebhookWorker::new(
        webhook_repo.clone(),
        webhook_log_repo.clone(),
        deliverer.clone(),
        dispatch_receiver,
    );
    let mut worker_manager = WorkerManager::new();
    worker_manager.register(tokio::spawn(worker.run()));

    // 7. Start HTTP server
    let app = routes::routes()
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(Extension(deal_repo))
        .layer(Extension(proposal_repo))
        .layer(Extension(webhook_repo))
        .layer(Extension(webhook_log_repo))
        .layer(Extension(deliverer))
        .layer(Extension(dispatch_queue))
        .layer(Extension(settings.funnel_policy()))
        .layer(Extension(settings.clone()));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => result?,
        _ = worker_manager.wait_for_shutdown() => {}
    }

    Ok(())
}
