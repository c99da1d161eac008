// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20250115_000001_create_deals;
mod m20250115_000002_create_proposals;
mod m20250115_000003_create_webhooks;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250115_000001_create_deals::Migration),
            Box::new(m20250115_000002_create_proposals::Migration),
            Box::new(m20250115_000003_create_webhooks::Migration),
        ]
    }
}
