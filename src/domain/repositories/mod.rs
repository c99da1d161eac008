// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 交易仓库（deal_repository）：管理交易及其阶段的持久化
/// - 提案仓库（proposal_repository）：按报表范围读取提案与查看记录快照
/// - Webhook仓库（webhook_repository）：管理Webhook订阅配置
/// - Webhook日志仓库（webhook_log_repository）：追加投递日志并派生统计
///
/// 这些接口确保了领域层不依赖于具体的数据存储技术，
/// 提高了系统的可测试性和可维护性。
pub mod deal_repository;
pub mod proposal_repository;
pub mod webhook_log_repository;
pub mod webhook_repository;
