// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

const STORE: &str = "relational";

/// 连接的最长存活时间
const MAX_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// 创建关系型存储的连接池
///
/// 进程内只创建一次；每个请求的 [`SeaOrmSession`](super::session::SeaOrmSession)
/// 从池中取连接开启自己的事务。
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 连接池
/// * `Err(DbErr)` - URL 非法或无法建立初始连接
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    info!(
        store = STORE,
        backend = backend(&settings.url),
        max_connections = ?settings.max_connections,
        "Creating connection pool"
    );
    Database::connect(pool_options(settings)).await
}

fn pool_options(settings: &DatabaseSettings) -> ConnectOptions {
    let mut options = ConnectOptions::new(settings.url.to_owned());

    if let Some(max) = settings.max_connections {
        options.max_connections(max);
    }
    if let Some(min) = settings.min_connections {
        options.min_connections(min);
    }
    // 取连接与建连共用同一个超时
    if let Some(secs) = settings.connect_timeout {
        let timeout = Duration::from_secs(secs);
        options.connect_timeout(timeout).acquire_timeout(timeout);
    }
    if let Some(secs) = settings.idle_timeout {
        options.idle_timeout(Duration::from_secs(secs));
    }

    options.max_lifetime(MAX_LIFETIME).sqlx_logging(false);
    options
}

/// 从 URL 中取出后端名称，日志中不输出完整 URL（可能含密码）
fn backend(url: &str) -> &str {
    url.split_once(':').map(|(scheme, _)| scheme).unwrap_or("unknown")
}
