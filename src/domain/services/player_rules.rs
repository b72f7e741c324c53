// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 允许使用的玩家颜色
pub const ALLOWED_COLORS: [&str; 8] = [
    "red", "blue", "green", "yellow", "orange", "purple", "white", "black",
];

/// 判断玩家颜色是否允许添加
///
/// 去除首尾空白并转为小写后，颜色必须属于固定调色板。
pub fn color_allowed(color: &str) -> bool {
    let normalized = color.trim().to_lowercase();
    ALLOWED_COLORS.contains(&normalized.as_str())
}
