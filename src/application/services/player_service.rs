// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::player_dto::{PlayerIn, PlayerOut, PlayerUpdate};
use crate::application::errors::ServiceError;
use crate::domain::models::pagination::Pagination;
use crate::domain::repositories::player_repository::PlayerRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::unit_of_work::{within, UnitOfWork};
use crate::domain::services::player_rules::color_allowed;
use uuid::Uuid;

/// 玩家服务
pub struct PlayerService<R: PlayerRepository> {
    repository: R,
    uow: Box<dyn UnitOfWork>,
}

impl<R: PlayerRepository> PlayerService<R> {
    pub fn new(repository: R, uow: Box<dyn UnitOfWork>) -> Self {
        Self { repository, uow }
    }

    pub async fn get_all(&self, pagination: Pagination) -> Result<Vec<PlayerOut>, ServiceError> {
        within(self.uow.as_ref(), async {
            let players = self.repository.get_all(Some(pagination)).await?;
            Ok(players.into_iter().map(PlayerOut::from).collect())
        })
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PlayerOut, ServiceError> {
        within(self.uow.as_ref(), async {
            self.repository
                .get_by_id(id)
                .await?
                .map(PlayerOut::from)
                .ok_or_else(|| ServiceError::from(RepositoryError::not_found("Player", id)))
        })
        .await
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        within(self.uow.as_ref(), async { Ok(self.repository.count().await?) }).await
    }

    /// 创建玩家
    ///
    /// 颜色校验在进入作用域之前完成，被拒绝的请求不会开启事务。
    pub async fn create(&self, player_in: PlayerIn) -> Result<PlayerOut, ServiceError> {
        if !color_allowed(&player_in.color) {
            return Err(ServiceError::Validation(format!(
                "Player with color '{}' cannot be added",
                player_in.color
            )));
        }

        within(self.uow.as_ref(), async {
            let player = self.repository.create(player_in.into()).await?;
            self.uow.commit().await?;
            Ok(player.into())
        })
        .await
    }

    pub async fn update(&self, id: Uuid, update: PlayerUpdate) -> Result<PlayerOut, ServiceError> {
        within(self.uow.as_ref(), async {
            let player = self.repository.update(id, update.into()).await?;
            self.uow.commit().await?;
            Ok(player.into())
        })
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        within(self.uow.as_ref(), async {
            self.repository.delete(id).await?;
            self.uow.commit().await?;
            Ok(())
        })
        .await
    }
}
