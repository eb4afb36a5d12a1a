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
                    .table(ScreenSize::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScreenSize::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScreenSize::Factory).integer().not_null())
                    .col(ColumnDef::new(ScreenSize::Width).integer().not_null())
                    .col(ColumnDef::new(ScreenSize::Height).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-screen_size-factory")
                            .from(ScreenSize::Table, ScreenSize::Factory)
                            .to(Factory::Table, Factory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-screen_size-factory-width-height")
                    .table(ScreenSize::Table)
                    .col(ScreenSize::Factory)
                    .col(ScreenSize::Width)
                    .col(ScreenSize::Height)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScreenSize::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScreenSize {
    Table,
    Id,
    Factory,
    Width,
    Height,
}

#[derive(DeriveIden)]
enum Factory {
    Table,
    Id,
}
