// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 交易（deal）：销售管道中的一笔交易及其所处阶段
/// - 阶段（stage）：规范阶段枚举与别名归一化表
/// - 提案（proposal）：发送给客户的提案及其查看记录
/// - 漏斗（funnel）：由提案数据派生的转化漏斗指标
/// - 网络钩子（webhook）：管道事件的外部订阅配置与投递日志
/// - OAuth状态（oauth_state）：集成授权跳转的防篡改声明
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为，是领域驱动设计的核心组成部分。
pub mod deal;
pub mod funnel;
pub mod oauth_state;
pub mod proposal;
pub mod stage;
pub mod webhook;
