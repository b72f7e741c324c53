// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供关系型存储的连接池、请求级会话和实体定义
pub mod connection;
pub mod entities;
pub mod session;
