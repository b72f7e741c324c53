// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::services::player_service::PlayerService;
use crate::application::services::user_service::UserService;
use crate::domain::repositories::key_value_cache::KeyValueCache;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::unit_of_work::UnitOfWork;
use crate::infrastructure::database::session::SeaOrmSession;
use crate::infrastructure::mongo::session::MongoSession;
use crate::infrastructure::repositories::player_repo_impl::PlayerRepoImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepoImpl;
use crate::infrastructure::unit_of_work::mongo_unit_of_work::{MongoUnitOfWork, NoopUnitOfWork};
use crate::infrastructure::unit_of_work::sea_orm_unit_of_work::SeaOrmUnitOfWork;
use mongodb::{Client, Database};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::warn;

/// 服务容器
///
/// 持有进程级共享的资源（连接池、MongoDB 客户端、缓存客户端），
/// 并为每个请求构造新的会话、工作单元、仓库和服务。
pub struct ServiceContainer {
    db: Arc<DatabaseConnection>,
    mongo_client: Client,
    mongo_database: Database,
    cache: Arc<dyn KeyValueCache>,
    use_transactions: bool,
}

impl ServiceContainer {
    /// 创建服务容器
    ///
    /// # 参数
    ///
    /// * `db` - 关系型数据库连接池
    /// * `mongo_client` - MongoDB 客户端
    /// * `mongo_database` - 玩家所在的数据库
    /// * `cache` - 键值缓存
    /// * `use_transactions` - 文档存储是否使用事务型工作单元
    pub fn new(
        db: Arc<DatabaseConnection>,
        mongo_client: Client,
        mongo_database: Database,
        cache: Arc<dyn KeyValueCache>,
        use_transactions: bool,
    ) -> Self {
        if !use_transactions {
            warn!(
                "MongoDB transactions disabled: player writes are applied immediately and multi-step writes are not atomic"
            );
        }

        Self {
            db,
            mongo_client,
            mongo_database,
            cache,
            use_transactions,
        }
    }

    /// 构造请求级用户服务
    pub fn user_service(&self) -> UserService<UserRepoImpl> {
        let session = SeaOrmSession::new(self.db.clone());
        let repository = UserRepoImpl::new(session.clone(), self.cache.clone());
        UserService::new(repository, Box::new(SeaOrmUnitOfWork::new(session)))
    }

    /// 构造请求级玩家服务
    ///
    /// 开启新的 MongoDB 会话，需要能够连接到服务器。
    pub async fn player_service(&self) -> Result<PlayerService<PlayerRepoImpl>, RepositoryError> {
        let session = MongoSession::start(&self.mongo_client, self.mongo_database.clone()).await?;

        let uow: Box<dyn UnitOfWork> = if self.use_transactions {
            Box::new(MongoUnitOfWork::new(session.clone()))
        } else {
            Box::new(NoopUnitOfWork)
        };

        Ok(PlayerService::new(PlayerRepoImpl::new(session), uow))
    }
}
