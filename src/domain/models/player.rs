// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 玩家实体
///
/// 文档存储中玩家的领域表示，构造后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Player {
    id: Uuid,
    color: String,
    is_alive: bool,
    created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(id: Uuid, color: String, is_alive: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            color,
            is_alive,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// 新建玩家所需的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub color: String,
    pub is_alive: bool,
}

/// 玩家的部分更新，`None` 表示不修改该字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerChanges {
    pub color: Option<String>,
    pub is_alive: Option<bool>,
}
