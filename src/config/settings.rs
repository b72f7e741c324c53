// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含关系型数据库、MongoDB、Redis、服务器和指标导出等所有配置项。
/// 在 `main` 中构造一次后显式向下传递。
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 关系型数据库配置
    pub database: DatabaseSettings,
    /// MongoDB 配置
    pub mongo: MongoSettings,
    /// Redis配置
    pub redis: RedisSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// MongoDB 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MongoSettings {
    /// 连接协议 (mongodb, mongodb+srv)
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// 应用数据库名称
    pub db_name: String,
    /// 认证数据库
    pub auth_db: String,
    /// 副本集名称，为空时不附加 replicaSet 参数
    pub replica_set: String,
    /// 是否启用多文档事务
    ///
    /// 单节点部署不支持事务，此时必须关闭，
    /// 多步写入将不再具备原子性。
    pub use_transactions: bool,
    /// 服务器选择超时（毫秒）
    pub server_selection_timeout_ms: u64,
    /// 连接超时（毫秒）
    pub connect_timeout_ms: u64,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
}

impl MongoSettings {
    /// 组装 MongoDB 连接串
    pub fn dsn(&self) -> String {
        let mut query = Vec::new();
        if !self.replica_set.is_empty() {
            query.push(format!("replicaSet={}", self.replica_set));
        }
        query.push(format!("authSource={}", self.auth_db));
        query.push("retryWrites=true".to_string());
        query.push("w=majority".to_string());

        format!(
            "{}://{}:{}@{}:{}/?{}",
            self.scheme,
            self.username,
            self.password,
            self.host,
            self.port,
            query.join("&")
        )
    }
}

/// Redis配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    /// Redis连接URL
    pub url: String,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听端口
    pub port: u16,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 加载顺序：内置默认值 → `config/default` → `config/{APP_ENVIRONMENT}` →
    /// 以 `DUOSTORE` 为前缀、`__` 为分隔符的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DUOSTORE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 内置默认值
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default DB pool settings
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default MongoDB settings
            .set_default("mongo.scheme", "mongodb")?
            .set_default("mongo.port", 27017)?
            .set_default("mongo.auth_db", "admin")?
            .set_default("mongo.replica_set", "rs0")?
            .set_default("mongo.use_transactions", true)?
            .set_default("mongo.server_selection_timeout_ms", 3000)?
            .set_default("mongo.connect_timeout_ms", 2000)?
            .set_default("mongo.max_pool_size", 50)?
            .set_default("mongo.min_pool_size", 1)?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.port", 9000)
    }
}
