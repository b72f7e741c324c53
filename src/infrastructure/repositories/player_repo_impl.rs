// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::mongo_repository::MongoRepository;
use super::FieldChanges;
use crate::domain::models::pagination::Pagination;
use crate::domain::models::player::{NewPlayer, Player, PlayerChanges};
use crate::domain::repositories::player_repository::PlayerRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::infrastructure::mongo::documents::player::PlayerDocument;
use crate::infrastructure::mongo::session::MongoSession;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::Bson;
use uuid::Uuid;

/// 玩家仓库实现
pub struct PlayerRepoImpl {
    base: MongoRepository<PlayerDocument>,
}

impl PlayerRepoImpl {
    pub fn new(session: MongoSession) -> Self {
        Self {
            base: MongoRepository::new(session),
        }
    }
}

#[async_trait]
impl PlayerRepository for PlayerRepoImpl {
    async fn get_all(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Player>, RepositoryError> {
        self.base
            .get_all(pagination)
            .await?
            .into_iter()
            .map(Player::try_from)
            .collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Player>, RepositoryError> {
        self.base
            .get_by_id(id)
            .await?
            .map(Player::try_from)
            .transpose()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.base.count().await
    }

    async fn create(&self, player: NewPlayer) -> Result<Player, RepositoryError> {
        let document = PlayerDocument::new(player.color, player.is_alive);
        Player::try_from(self.base.create(document).await?)
    }

    async fn update(&self, id: Uuid, changes: PlayerChanges) -> Result<Player, RepositoryError> {
        let fields: FieldChanges<&'static str, Bson> = vec![
            (PlayerDocument::COLOR, changes.color.map(Bson::from)),
            (PlayerDocument::IS_ALIVE, changes.is_alive.map(Bson::from)),
        ];

        Player::try_from(self.base.update_by_id(id, fields, true).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.base.delete(id).await
    }
}

impl TryFrom<PlayerDocument> for Player {
    type Error = RepositoryError;

    fn try_from(document: PlayerDocument) -> Result<Self, Self::Error> {
        let PlayerDocument {
            id,
            color,
            is_alive,
            created_at,
        } = document;

        let created_at = DateTime::<Utc>::from_timestamp_millis(created_at.timestamp_millis())
            .ok_or_else(|| {
                RepositoryError::Conversion(format!(
                    "Player {} has out-of-range created_at",
                    id
                ))
            })?;

        Ok(Player::new(
            Uuid::from_bytes(id.bytes()),
            color,
            is_alive,
            created_at,
        ))
    }
}
