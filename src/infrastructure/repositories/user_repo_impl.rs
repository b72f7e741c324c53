// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sea_orm_repository::SeaOrmRepository;
use super::FieldChanges;
use crate::domain::models::pagination::Pagination;
use crate::domain::models::user::{NewUser, User, UserChanges};
use crate::domain::repositories::key_value_cache::KeyValueCache;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::cache::payload::{from_cache_payload, to_cache_payload};
use crate::infrastructure::database::entities::user;
use crate::infrastructure::database::session::SeaOrmSession;
use async_trait::async_trait;
use chrono::Utc;
use rand::seq::IndexedRandom;
use sea_orm::{ActiveModelBehavior, Set, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// 随机用户的缓存键
pub const RANDOM_USER_CACHE_KEY: &str = "random_user";
/// 随机用户的缓存过期时间（秒）
pub const RANDOM_USER_CACHE_TTL_SECONDS: u64 = 5 * 60;

const ENTITY: &str = "User";

/// 用户仓库实现
///
/// 在通用关系型仓库之上增加随机用户的旁路缓存。
pub struct UserRepoImpl {
    base: SeaOrmRepository<user::Entity>,
    cache: Arc<dyn KeyValueCache>,
}

impl UserRepoImpl {
    /// 创建新的用户仓库实现
    ///
    /// # 参数
    ///
    /// * `session` - 请求级会话，与工作单元共享
    /// * `cache` - 进程内共享的键值缓存
    pub fn new(session: SeaOrmSession, cache: Arc<dyn KeyValueCache>) -> Self {
        Self {
            base: SeaOrmRepository::new(session, ENTITY),
            cache,
        }
    }

    /// 读取缓存中的随机用户
    ///
    /// 读取失败按未命中处理；载荷无法解码时删除该键后按未命中处理。
    async fn cached_random_user(&self) -> Option<User> {
        let payload = match self.cache.get(RANDOM_USER_CACHE_KEY).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = RANDOM_USER_CACHE_KEY, error = %e, "Failed to read cache");
                return None;
            }
        };

        match from_cache_payload::<User>(&payload) {
            Ok(user) => {
                debug!(key = RANDOM_USER_CACHE_KEY, user_id = %user.id(), "Cache hit");
                metrics::counter!("cache_hits_total").increment(1);
                Some(user)
            }
            Err(e) => {
                warn!(
                    key = RANDOM_USER_CACHE_KEY,
                    error = %e,
                    "Failed to validate cached user, dropping entry"
                );
                metrics::counter!("cache_corrupt_entries_total").increment(1);
                if let Err(e) = self.cache.delete(RANDOM_USER_CACHE_KEY).await {
                    error!(key = RANDOM_USER_CACHE_KEY, error = %e, "Failed to delete cache entry");
                }
                None
            }
        }
    }

    /// 尽力回写缓存，失败只记录日志
    async fn store_random_user(&self, user: &User) {
        let result = match to_cache_payload(user) {
            Ok(payload) => {
                self.cache
                    .set(
                        RANDOM_USER_CACHE_KEY,
                        &payload,
                        RANDOM_USER_CACHE_TTL_SECONDS,
                    )
                    .await
            }
            Err(e) => Err(e.into()),
        };

        if let Err(e) = result {
            error!(key = RANDOM_USER_CACHE_KEY, error = %e, "Failed to write cache");
            metrics::counter!("cache_write_failures_total").increment(1);
        }
    }
}

#[async_trait]
impl UserRepository for UserRepoImpl {
    async fn get_all(&self, pagination: Option<Pagination>) -> Result<Vec<User>, RepositoryError> {
        let models = self.base.get_all(pagination).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.base.get_by_id(id).await?.map(User::from))
    }

    async fn get_random_user(&self) -> Result<User, RepositoryError> {
        if let Some(user) = self.cached_random_user().await {
            return Ok(user);
        }
        metrics::counter!("cache_misses_total").increment(1);

        let users = self.get_all(None).await?;
        let user = users
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound("No users in database".to_string()))?;

        self.store_random_user(&user).await;
        Ok(user)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.base.count().await
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let model = self.base.create(active_model(new_user)).await?;
        Ok(model.into())
    }

    async fn create_many(&self, users: Vec<NewUser>) -> Result<Vec<User>, RepositoryError> {
        let models = self
            .base
            .create_many(users.into_iter().map(active_model).collect())
            .await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<User, RepositoryError> {
        let fields: FieldChanges<user::Column, Value> = vec![
            (user::Column::Name, changes.name.map(Value::from)),
            (
                user::Column::UpdatedAt,
                Some(Value::from(Utc::now().fixed_offset())),
            ),
        ];

        let model = self.base.update_by_id(id, fields, true).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.base.delete(id).await
    }
}

fn active_model(new_user: NewUser) -> user::ActiveModel {
    user::ActiveModel {
        name: Set(new_user.name),
        ..user::ActiveModel::new()
    }
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        // 不使用 `..`：新增列时必须在这里补上映射
        let user::Model {
            id,
            name,
            created_at,
            updated_at,
        } = model;

        User::new(
            id,
            name,
            created_at.with_timezone(&Utc),
            updated_at.with_timezone(&Utc),
        )
    }
}
