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
                    .table(ColorDepth::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ColorDepth::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ColorDepth::Factory).integer().not_null())
                    .col(
                        ColumnDef::new(ColorDepth::BitsPerPixel)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-color_depth-factory")
                            .from(ColorDepth::Table, ColorDepth::Factory)
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
                    .name("idx-color_depth-factory-bits_per_pixel")
                    .table(ColorDepth::Table)
                    .col(ColorDepth::Factory)
                    .col(ColorDepth::BitsPerPixel)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ColorDepth::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ColorDepth {
    Table,
    Id,
    Factory,
    BitsPerPixel,
}

#[derive(DeriveIden)]
enum Factory {
    Table,
    Id,
}
