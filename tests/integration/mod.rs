// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api_tests;
pub mod mongo_repository_test;
pub mod sea_orm_repository_test;
pub mod unit_of_work_test;
