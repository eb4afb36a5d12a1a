/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user, architecture, platform and operating system entities

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 7,
            username: "testuser".to_owned(),
            email: "test@example.com".to_owned(),
            created_at: naive_date,
        }]])
        .into_connection();

    let result = user::Entity::find_by_id(7).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.username, "testuser");
    assert_eq!(user.email, "test@example.com");

    Ok(())
}

#[tokio::test]
async fn test_architecture_lookup_by_name() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![architecture::Model {
            id: 2,
            name: "x86_64".to_owned(),
        }]])
        .append_query_results([Vec::<architecture::Model>::new()])
        .into_connection();

    let found = architecture::Entity::find()
        .filter(architecture::Column::Name.eq("x86_64"))
        .one(&db)
        .await?;
    assert_eq!(found.map(|a| a.id), Some(2));

    let missing = architecture::Entity::find()
        .filter(architecture::Column::Name.eq("ppc"))
        .one(&db)
        .await?;
    assert!(missing.is_none());

    Ok(())
}

#[tokio::test]
async fn test_platform_operating_systems() -> Result<(), DbErr> {
    let linux = platform::Model {
        id: 1,
        name: "Linux".to_owned(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            operating_system::Model {
                id: 1,
                platform: 1,
                name: "Debian".to_owned(),
                version: "12".to_owned(),
            },
            operating_system::Model {
                id: 2,
                platform: 1,
                name: "Ubuntu".to_owned(),
                version: "24.04".to_owned(),
            },
        ]])
        .into_connection();

    let systems = linux.find_related(operating_system::Entity).all(&db).await?;

    assert_eq!(systems.len(), 2);
    assert!(systems.iter().all(|os| os.platform == linux.id));

    Ok(())
}
