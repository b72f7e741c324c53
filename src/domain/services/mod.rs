// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 纯业务规则，不访问任何存储：
/// - 玩家规则（player_rules）：判断玩家颜色是否允许添加
pub mod player_rules;
