/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use common::database::*;
use common::types::*;
use sea_orm::{ConnectOptions, DatabaseConnection, ModelTrait};

pub async fn memory_db(capture: bool) -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);

    open_database(opt, capture)
        .await
        .expect("Failed to open in-memory database")
}

/// A factory named `factory` with three screen sizes and two color depths.
pub struct Fixture {
    pub db: DatabaseConnection,
    pub user: MUser,
    pub architecture: MArchitecture,
    pub platform: MPlatform,
    pub operating_system: MOperatingSystem,
    pub factory: MFactory,
    pub size_640: MScreenSize,
    pub size_800: MScreenSize,
    pub size_1024: MScreenSize,
    pub depth_16: MColorDepth,
    pub depth_24: MColorDepth,
}

impl Fixture {
    pub async fn set_up() -> Self {
        Self::set_up_with(memory_db(false).await).await
    }

    pub async fn set_up_with(db: DatabaseConnection) -> Self {
        let user = create_user(&db, "admin", "admin@example.com").await.unwrap();
        let architecture = create_architecture(&db, "x86_64").await.unwrap();
        let platform = create_platform(&db, "linux").await.unwrap();
        let operating_system = create_operating_system(&db, platform.id, "ubuntu", "24.04")
            .await
            .unwrap();

        let factory = create_factory(&db, "factory", user.id, architecture.id, operating_system.id)
            .await
            .unwrap();

        let size_640 = create_screen_size(&db, factory.id, 640, 480).await.unwrap();
        let size_800 = create_screen_size(&db, factory.id, 800, 600).await.unwrap();
        let size_1024 = create_screen_size(&db, factory.id, 1024, 768).await.unwrap();
        let depth_16 = create_color_depth(&db, factory.id, 16).await.unwrap();
        let depth_24 = create_color_depth(&db, factory.id, 24).await.unwrap();

        Fixture {
            db,
            user,
            architecture,
            platform,
            operating_system,
            factory,
            size_640,
            size_800,
            size_1024,
            depth_16,
            depth_24,
        }
    }

    pub async fn tear_down(self) {
        let db = &self.db;

        self.depth_16.delete(db).await.unwrap();
        self.depth_24.delete(db).await.unwrap();
        self.size_640.delete(db).await.unwrap();
        self.size_800.delete(db).await.unwrap();
        self.size_1024.delete(db).await.unwrap();
        self.factory.delete(db).await.unwrap();
        self.operating_system.delete(db).await.unwrap();
        self.platform.delete(db).await.unwrap();
        self.architecture.delete(db).await.unwrap();
        self.user.delete(db).await.unwrap();
    }
}
