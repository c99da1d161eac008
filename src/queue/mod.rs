// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 提供Webhook分发队列功能，把事件投递从触发它的
/// 请求路径上解耦出来
pub mod dispatch_queue;
