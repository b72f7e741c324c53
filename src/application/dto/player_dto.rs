// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::player::{NewPlayer, Player, PlayerChanges};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerIn {
    pub color: String,
    pub is_alive: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerUpdate {
    pub color: Option<String>,
    pub is_alive: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerOut {
    pub id: Uuid,
    pub color: String,
    pub is_alive: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PlayerIn> for NewPlayer {
    fn from(dto: PlayerIn) -> Self {
        Self {
            color: dto.color,
            is_alive: dto.is_alive,
        }
    }
}

impl From<PlayerUpdate> for PlayerChanges {
    fn from(dto: PlayerUpdate) -> Self {
        Self {
            color: dto.color,
            is_alive: dto.is_alive,
        }
    }
}

impl From<Player> for PlayerOut {
    fn from(player: Player) -> Self {
        Self {
            id: player.id(),
            color: player.color().to_string(),
            is_alive: player.is_alive(),
            created_at: player.created_at(),
        }
    }
}
