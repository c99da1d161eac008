// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::webhook_log_repository::WebhookLogRepository;
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::webhook_service::WebhookDeliverer;
use crate::domain::use_cases::dispatch_webhook_event::DispatchWebhookEventUseCase;
use crate::queue::dispatch_queue::DispatchRequest;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Webhook工作器
///
/// 消费分发队列并执行事件投递。工作器运行在请求路径之外：
/// 订阅端点的延迟和故障只体现在投递日志里，永远不会传播回
/// 触发事件的管道变更。
pub struct WebhookWorker<W, L, D>
where
    W: WebhookRepository + 'static,
    L: WebhookLogRepository + 'static,
    D: WebhookDeliverer + ?Sized + 'static,
{
    dispatch: DispatchWebhookEventUseCase<W, L, D>,
    receiver: mpsc::Receiver<DispatchRequest>,
}

impl<W, L, D> WebhookWorker<W, L, D>
where
    W: WebhookRepository,
    L: WebhookLogRepository,
    D: WebhookDeliverer + ?Sized,
{
    /// 创建新的Webhook工作器实例
    ///
    /// # 参数
    ///
    /// * `webhooks` - Webhook仓库
    /// * `logs` - 投递日志仓库
    /// * `deliverer` - 出站投递实现
    /// * `receiver` - 分发队列接收端
    pub fn new(
        webhooks: Arc<W>,
        logs: Arc<L>,
        deliverer: Arc<D>,
        receiver: mpsc::Receiver<DispatchRequest>,
    ) -> Self {
        Self {
            dispatch: DispatchWebhookEventUseCase::new(webhooks, logs, deliverer),
            receiver,
        }
    }

    /// 运行Webhook工作器
    ///
    /// 循环消费分发请求直到队列的所有发送端关闭。
    pub async fn run(mut self) {
        info!("Webhook worker started");
        while let Some(request) = self.receiver.recv().await {
            if let Err(e) = self.dispatch.execute(&request).await {
                error!("Error dispatching {}: {}", request.event, e);
            }
        }
        info!("Webhook worker stopped");
    }
}
