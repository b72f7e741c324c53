// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::MongoDocument;
use mongodb::bson;
use serde::{Deserialize, Serialize};

/// `players` 集合中的玩家文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDocument {
    #[serde(rename = "_id")]
    pub id: bson::Uuid,
    pub color: String,
    pub is_alive: bool,
    pub created_at: bson::DateTime,
}

impl PlayerDocument {
    pub const COLOR: &'static str = "color";
    pub const IS_ALIVE: &'static str = "is_alive";

    /// 创建新文档，ID 与创建时间在客户端生成
    pub fn new(color: String, is_alive: bool) -> Self {
        Self {
            id: bson::Uuid::from_bytes(uuid::Uuid::new_v4().into_bytes()),
            color,
            is_alive,
            created_at: bson::DateTime::now(),
        }
    }
}

impl MongoDocument for PlayerDocument {
    const COLLECTION: &'static str = "players";
    const ENTITY: &'static str = "Player";
}
