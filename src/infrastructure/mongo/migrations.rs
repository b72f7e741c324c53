// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::documents::player::PlayerDocument;
use super::documents::MongoDocument;
use mongodb::bson::{doc, Document};
use mongodb::Database;
use tracing::info;

/// 将旧版玩家文档中拼写错误的 `clor` 字段更名为 `color`
///
/// 可重复执行，已迁移的文档不会再被匹配。
///
/// # 返回值
///
/// * `Ok(u64)` - 被修改的文档数量
pub async fn rename_legacy_player_fields(database: &Database) -> Result<u64, mongodb::error::Error> {
    let players = database.collection::<Document>(PlayerDocument::COLLECTION);
    let result = players
        .update_many(
            doc! { "clor": { "$exists": true } },
            doc! { "$rename": { "clor": PlayerDocument::COLOR } },
        )
        .await?;

    if result.modified_count > 0 {
        info!(
            modified = result.modified_count,
            "Renamed legacy player field clor -> color"
        );
    }
    Ok(result.modified_count)
}
