// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// 将领域记录编码为缓存载荷（JSON 文本）
pub fn to_cache_payload<T: Serialize>(record: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}

/// 从缓存载荷解码领域记录
///
/// 字段缺失、多余字段或类型不符都会导致失败，调用方应把失败视为缓存未命中。
pub fn from_cache_payload<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}
