// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MongoSettings;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::info;

/// 创建 MongoDB 客户端
///
/// 客户端内部维护连接池，整个进程共享一个实例。
/// 构造时不会立即建立连接，首次操作时才进行服务器选择。
///
/// # 参数
///
/// * `settings` - MongoDB 配置
///
/// # 返回值
///
/// * `Ok(Client)` - 客户端
/// * `Err(mongodb::error::Error)` - 连接串解析失败或选项非法
pub async fn create_client(settings: &MongoSettings) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(settings.dsn()).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.server_selection_timeout =
        Some(Duration::from_millis(settings.server_selection_timeout_ms));
    options.connect_timeout = Some(Duration::from_millis(settings.connect_timeout_ms));
    options.max_pool_size = Some(settings.max_pool_size);
    options.min_pool_size = Some(settings.min_pool_size);

    info!(
        host = %settings.host,
        port = settings.port,
        db = %settings.db_name,
        "Creating MongoDB client"
    );
    Client::with_options(options)
}

/// 获取应用数据库句柄
pub fn database(client: &Client, settings: &MongoSettings) -> Database {
    client.database(&settings.db_name)
}
