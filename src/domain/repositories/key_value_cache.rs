// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;

/// 键值缓存端口
///
/// 由外部的网络缓存服务提供支持，进程内只持有一个共享实例。
/// 缓存永远不是数据的权威来源。
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// 读取键对应的值，不存在时返回 `None`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// 写入键值对并设置过期时间（秒）
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;

    /// 删除键
    async fn delete(&self, key: &str) -> Result<()>;
}
