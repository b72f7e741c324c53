// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod player;

/// 可由通用仓库持久化的文档
pub trait MongoDocument: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {
    /// 集合名称
    const COLLECTION: &'static str;
    /// 错误信息中使用的实体名称
    const ENTITY: &'static str;
}
