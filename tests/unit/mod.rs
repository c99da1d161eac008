// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 单元测试模块
///
/// 针对用例编排层的隔离测试，仓库与投递器均为内存替身
mod dispatch_use_case_test;
mod pipeline_flow_test;
