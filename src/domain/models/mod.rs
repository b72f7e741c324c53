// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务记录，包括：
/// - 用户（user）：保存在关系型存储中的用户
/// - 玩家（player）：保存在文档存储中的玩家
/// - 分页（pagination）：列表查询使用的 (limit, offset) 值
///
/// 领域记录一经构造便不可变，任何修改都会由仓库重新物化出新的记录。
pub mod pagination;
pub mod player;
pub mod user;
