// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作单元实现
///
/// 关系型存储始终使用事务；文档存储根据部署拓扑选择事务型或空实现
pub mod mongo_unit_of_work;
pub mod sea_orm_unit_of_work;
