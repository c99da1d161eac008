// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::WebhookEventType;
use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

/// 分发请求
///
/// 一次管道事件的分发指令，由变更请求路径入队、
/// 由后台Webhook工作器消费。
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// 事件所属团队ID
    pub team_id: Uuid,
    /// 事件类型
    pub event: WebhookEventType,
    /// 事件数据
    pub data: serde_json::Value,
}

/// Webhook分发队列
///
/// 有界内存队列，把事件投递与触发它的管道变更解耦：
/// 请求路径只做入队，订阅方端点的延迟永远不会反压到
/// 交易/提案变更上。入队失败只记录日志，绝不向调用方
/// 传播——Webhook故障不允许使触发它的变更失败。
#[derive(Clone)]
pub struct DispatchQueue {
    sender: mpsc::Sender<DispatchRequest>,
}

impl DispatchQueue {
    /// 创建分发队列
    ///
    /// # 参数
    ///
    /// * `capacity` - 队列容量
    ///
    /// # 返回值
    ///
    /// 返回队列句柄和供工作器消费的接收端
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<DispatchRequest>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// 入队一次分发请求
    ///
    /// 非阻塞：队列已满或已关闭时丢弃请求并记录警告。
    pub fn enqueue(&self, request: DispatchRequest) {
        if let Err(e) = self.sender.try_send(request) {
            warn!("Dropping webhook dispatch request: {}", e);
            metrics::counter!("webhook_dispatch_dropped_total").increment(1);
        }
    }
}
