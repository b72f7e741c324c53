// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 两个通用仓库分别封装关系型存储和文档存储的 CRUD 原语，
/// 实体仓库在其上组合实现领域仓库接口
pub mod mongo_repository;
pub mod player_repo_impl;
pub mod sea_orm_repository;
pub mod user_repo_impl;

/// 部分更新的字段列表
///
/// 每项为（字段，值），值为 `None` 表示调用方未提供该字段。
pub type FieldChanges<K, V> = Vec<(K, Option<V>)>;
