// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// MongoDB 客户端构造
pub mod connection;
/// 文档定义
pub mod documents;
/// 启动时执行的集合迁移
pub mod migrations;
/// 请求级会话
pub mod session;
