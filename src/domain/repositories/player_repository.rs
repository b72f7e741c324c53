// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::pagination::Pagination;
use crate::domain::models::player::{NewPlayer, Player, PlayerChanges};
use async_trait::async_trait;
use uuid::Uuid;

/// 玩家仓库特质
///
/// 文档存储上的玩家数据访问接口，只提供标准 CRUD，不使用缓存。
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// 获取全部玩家，给定分页参数时只返回对应窗口
    async fn get_all(&self, pagination: Option<Pagination>)
        -> Result<Vec<Player>, RepositoryError>;

    /// 根据ID查找玩家，不存在时返回 `Ok(None)`
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Player>, RepositoryError>;

    /// 玩家总数（忽略分页）
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 创建玩家
    async fn create(&self, player: NewPlayer) -> Result<Player, RepositoryError>;

    /// 部分更新玩家，不存在时返回 `RepositoryError::NotFound`
    async fn update(&self, id: Uuid, changes: PlayerChanges) -> Result<Player, RepositoryError>;

    /// 删除玩家，不存在时返回 `RepositoryError::NotFound`
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
