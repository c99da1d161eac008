// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序层
///
/// 包含数据传输对象等应用层组件
pub mod dto;
