// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了复杂的
/// 业务规则和领域逻辑，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 看板服务（kanban_service）：阶段移动与拖拽目标解析的纯函数
/// - 漏斗服务（funnel_service）：提案转化漏斗的纯内存聚合
/// - Webhook服务（webhook_service）：负载构建、HMAC签名与投递接口
/// - OAuth状态服务（oauth_state_service）：集成授权状态令牌的签发与校验
///
/// 本模块的服务均不执行I/O、不挂起：它们对已取出的内存数据
/// 做纯计算，这一分离是其可以脱离后端单元测试的前提。
pub mod funnel_service;
pub mod kanban_service;
pub mod oauth_state_service;
pub mod webhook_service;
