// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 该模块编排领域对象完成具体业务操作：
/// - 交易创建与阶段更新（含赢单/输单事件分发）
/// - 漏斗报表构建
/// - Webhook创建、事件分发与手动重试
pub mod build_funnel_report;
pub mod create_deal;
pub mod create_webhook;
pub mod dispatch_webhook_event;
pub mod retry_webhook;
pub mod update_deal_stage;
