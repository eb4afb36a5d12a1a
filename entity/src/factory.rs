/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A screenshot-capture host. `name` is unique and restricted to lowercase
/// letters, digits and inner dashes by a check constraint on the table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "factory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub admin: i32,
    pub architecture: i32,
    pub operating_system: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Admin",
        to = "super::user::Column::Id"
    )]
    Admin,
    #[sea_orm(
        belongs_to = "super::architecture::Entity",
        from = "Column::Architecture",
        to = "super::architecture::Column::Id"
    )]
    Architecture,
    #[sea_orm(
        belongs_to = "super::operating_system::Entity",
        from = "Column::OperatingSystem",
        to = "super::operating_system::Column::Id"
    )]
    OperatingSystem,
    #[sea_orm(has_many = "super::screen_size::Entity")]
    ScreenSize,
    #[sea_orm(has_many = "super::color_depth::Entity")]
    ColorDepth,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl Related<super::architecture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Architecture.def()
    }
}

impl Related<super::operating_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OperatingSystem.def()
    }
}

impl Related<super::screen_size::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScreenSize.def()
    }
}

impl Related<super::color_depth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ColorDepth.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
