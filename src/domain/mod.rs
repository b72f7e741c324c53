// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务概念，包括：
/// - 领域模型（models）：不可变的用户、玩家记录以及分页参数
/// - 仓库接口（repositories）：工作单元、实体仓库与缓存端口
/// - 服务（services）：纯业务规则，例如玩家颜色校验
///
/// 领域层只定义契约，具体的存储与缓存实现位于基础设施层。
pub mod models;
pub mod repositories;
pub mod services;
