// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的SeaORM实现
/// 负责领域模型与数据库实体之间的转换
pub mod deal_repo_impl;
pub mod proposal_repo_impl;
pub mod webhook_log_repo_impl;
pub mod webhook_repo_impl;
