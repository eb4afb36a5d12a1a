/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Factory names are host-name labels: lowercase letters, digits and dashes,
/// starting and ending with a letter or digit.
fn factory_name_check(backend: DbBackend) -> String {
    match backend {
        DbBackend::Postgres => "name ~ '^[a-z0-9]([a-z0-9-]*[a-z0-9])?$'".to_string(),
        DbBackend::MySql => "name REGEXP BINARY '^[a-z0-9]([a-z0-9-]*[a-z0-9])?$'".to_string(),
        DbBackend::Sqlite => "name GLOB '[a-z0-9]*' AND name GLOB '*[a-z0-9]' \
             AND name NOT GLOB '*[^a-z0-9-]*' AND length(name) <= 20"
            .to_string(),
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let name_check = factory_name_check(manager.get_database_backend());

        manager
            .create_table(
                Table::create()
                    .table(Factory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Factory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Factory::Name)
                            .string_len(20)
                            .not_null()
                            .unique_key()
                            .check(Expr::cust(name_check)),
                    )
                    .col(ColumnDef::new(Factory::Admin).integer().not_null())
                    .col(ColumnDef::new(Factory::Architecture).integer().not_null())
                    .col(
                        ColumnDef::new(Factory::OperatingSystem)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Factory::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-factory-admin")
                            .from(Factory::Table, Factory::Admin)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-factory-architecture")
                            .from(Factory::Table, Factory::Architecture)
                            .to(Architecture::Table, Architecture::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-factory-operating_system")
                            .from(Factory::Table, Factory::OperatingSystem)
                            .to(OperatingSystem::Table, OperatingSystem::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Factory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Factory {
    Table,
    Id,
    Name,
    Admin,
    Architecture,
    OperatingSystem,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Architecture {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum OperatingSystem {
    Table,
    Id,
}
