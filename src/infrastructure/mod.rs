// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，提供对具体技术的抽象和封装。
/// 基础设施层负责与外部系统的交互，包括关系型数据库、MongoDB 和缓存。
///
/// 包含的子模块：
/// - 缓存（cache）：Redis 客户端与缓存载荷编解码
/// - 容器（container）：按请求组装服务
/// - 数据库（database）：关系型连接、实体映射与请求级会话
/// - 指标（metrics）：Prometheus 导出器
/// - MongoDB（mongo）：客户端、会话、文档与启动迁移
/// - 仓库实现（repositories）：通用仓库与实体仓库
/// - 工作单元（unit_of_work）：事务边界的具体实现
///
/// 基础设施层遵循依赖倒置原则，依赖于领域层的抽象接口，
/// 确保领域层保持纯粹的业务逻辑，不受技术实现的影响。
pub mod cache;
pub mod container;
pub mod database;
pub mod metrics;
pub mod mongo;
pub mod repositories;
pub mod unit_of_work;
