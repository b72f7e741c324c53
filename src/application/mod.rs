// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 服务层在工作单元作用域内编排仓库调用，
/// 并把领域记录投影为对外的数据传输对象
pub mod dto;
pub mod errors;
pub mod services;
