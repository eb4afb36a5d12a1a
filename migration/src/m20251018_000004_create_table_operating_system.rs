/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OperatingSystem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OperatingSystem::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OperatingSystem::Platform)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OperatingSystem::Name).string().not_null())
                    .col(
                        ColumnDef::new(OperatingSystem::Version)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-operating_system-platform")
                            .from(OperatingSystem::Table, OperatingSystem::Platform)
                            .to(Platform::Table, Platform::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-operating_system-platform-name-version")
                    .table(OperatingSystem::Table)
                    .col(OperatingSystem::Platform)
                    .col(OperatingSystem::Name)
                    .col(OperatingSystem::Version)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OperatingSystem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OperatingSystem {
    Table,
    Id,
    Platform,
    Name,
    Version,
}

#[derive(DeriveIden)]
enum Platform {
    Table,
    Id,
}
