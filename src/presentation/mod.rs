// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表现层模块
///
/// 负责HTTP接口的错误映射、请求提取、处理器与路由
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
