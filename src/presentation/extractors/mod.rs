// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 从HTTP请求中提取并校验跨端点共用的信息
pub mod team_id;
