// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的数据访问契约，遵循依赖倒置原则：
/// - 仓库错误（repository_error）：所有存储操作共用的错误类型
/// - 工作单元（unit_of_work）：事务边界及其作用域辅助函数
/// - 键值缓存（key_value_cache）：旁路缓存使用的缓存端口
/// - 用户仓库（user_repository）：关系型存储上的用户 CRUD 与随机用户查询
/// - 玩家仓库（player_repository）：文档存储上的玩家 CRUD
///
/// 具体实现由基础设施层提供，应用服务只依赖这些接口。
pub mod key_value_cache;
pub mod player_repository;
pub mod repository_error;
pub mod unit_of_work;
pub mod user_repository;
