// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试模块
///
/// 通过HTTP接口与内存SQLite数据库验证各子系统的协作
pub mod helpers;

mod deal_api_test;
mod funnel_report_test;
mod health_check;
mod oauth_state_test;
