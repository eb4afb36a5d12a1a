/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use common::database::*;
use common::types::*;
use sea_orm::{ConnectOptions, DatabaseConnection};
use std::sync::Arc;

pub fn create_cli(debug: bool) -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        max_connections: 1,
        debug,
        state_file: None,
    }
}

/// Ids of the rows created by [`seed`].
pub struct Seed {
    pub user: i32,
    pub architecture: i32,
    pub operating_system: i32,
    pub factory: i32,
}

pub async fn seed(db: &DatabaseConnection) -> Seed {
    let user = create_user(db, "admin", "admin@example.com").await.unwrap();
    let architecture = create_architecture(db, "x86_64").await.unwrap();
    let platform = create_platform(db, "linux").await.unwrap();
    let operating_system = create_operating_system(db, platform.id, "ubuntu", "24.04")
        .await
        .unwrap();
    let factory = create_factory(db, "factory", user.id, architecture.id, operating_system.id)
        .await
        .unwrap();

    for (width, height) in [(640, 480), (800, 600), (1024, 768)] {
        create_screen_size(db, factory.id, width, height).await.unwrap();
    }

    for bits_per_pixel in [16, 24] {
        create_color_depth(db, factory.id, bits_per_pixel).await.unwrap();
    }

    Seed {
        user: user.id,
        architecture: architecture.id,
        operating_system: operating_system.id,
        factory: factory.id,
    }
}

pub async fn create_server(debug: bool) -> (TestServer, Seed) {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);

    let db = open_database(opt, debug).await.unwrap();
    let seed = seed(&db).await;

    let state = Arc::new(ServerState {
        db,
        cli: create_cli(debug),
    });

    let server = TestServer::new(web::create_router(state)).unwrap();
    (server, seed)
}
