// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供键值缓存端口的 Redis 实现，以及缓存载荷的编解码
pub mod payload;
pub mod redis_client;
