// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 数据库迁移工具入口点
///
/// 从 `DATABASE_URL` 读取连接串，支持 `up` / `down` / `status` 等子命令
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
