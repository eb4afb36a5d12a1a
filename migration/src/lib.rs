/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_table_user;
mod m20251018_000002_create_table_architecture;
mod m20251018_000003_create_table_platform;
mod m20251018_000004_create_table_operating_system;
mod m20251018_000005_create_table_factory;
mod m20251018_000006_create_table_screen_size;
mod m20251018_000007_create_table_color_depth;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_table_user::Migration),
            Box::new(m20251018_000002_create_table_architecture::Migration),
            Box::new(m20251018_000003_create_table_platform::Migration),
            Box::new(m20251018_000004_create_table_operating_system::Migration),
            Box::new(m20251018_000005_create_table_factory::Migration),
            Box::new(m20251018_000006_create_table_screen_size::Migration),
            Box::new(m20251018_000007_create_table_color_depth::Migration),
        ]
    }
}
