// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::pagination::Pagination;
use crate::domain::models::user::{NewUser, User, UserChanges};
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
///
/// 关系型存储上的用户数据访问接口，附带一个旁路缓存的随机用户查询。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 获取全部用户，给定分页参数时只返回对应窗口
    async fn get_all(&self, pagination: Option<Pagination>) -> Result<Vec<User>, RepositoryError>;

    /// 根据ID查找用户
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(User))` - 找到用户
    /// * `Ok(None)` - 用户不存在（不视为错误）
    /// * `Err(RepositoryError)` - 查询失败
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// 随机挑选一个用户
    ///
    /// 优先读取缓存；缓存未命中或损坏时从存储中全量加载后均匀随机挑选，
    /// 并尽力回写缓存。存储为空时返回 `RepositoryError::NotFound`。
    async fn get_random_user(&self) -> Result<User, RepositoryError>;

    /// 用户总数（忽略分页）
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 创建用户
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// 批量创建用户，空批次直接返回空列表
    async fn create_many(&self, users: Vec<NewUser>) -> Result<Vec<User>, RepositoryError>;

    /// 部分更新用户
    ///
    /// 用户不存在时返回 `RepositoryError::NotFound`
    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<User, RepositoryError>;

    /// 删除用户，用户不存在时返回 `RepositoryError::NotFound`
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
