/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for factory entity and its related screen sizes and color depths

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

fn test_factory() -> factory::Model {
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    factory::Model {
        id: 1,
        name: "factory".to_owned(),
        admin: 1,
        architecture: 1,
        operating_system: 1,
        created_at: naive_date,
    }
}

#[tokio::test]
async fn test_factory_entity_basic() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_factory()]])
        .into_connection();

    let result = factory::Entity::find()
        .filter(factory::Column::Name.eq("factory"))
        .one(&db)
        .await?;

    assert!(result.is_some());
    let factory = result.unwrap();
    assert_eq!(factory.name, "factory");
    assert_eq!(factory.admin, 1);

    Ok(())
}

#[tokio::test]
async fn test_factory_related_screen_sizes() -> Result<(), DbErr> {
    let sizes = vec![
        screen_size::Model {
            id: 1,
            factory: 1,
            width: 640,
            height: 480,
        },
        screen_size::Model {
            id: 2,
            factory: 1,
            width: 800,
            height: 600,
        },
        screen_size::Model {
            id: 3,
            factory: 1,
            width: 1024,
            height: 768,
        },
    ];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([sizes])
        .into_connection();

    let result = test_factory()
        .find_related(screen_size::Entity)
        .all(&db)
        .await?;

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|s| s.factory == 1));
    assert_eq!(result[1].width, 800);
    assert_eq!(result[1].height, 600);

    Ok(())
}

#[tokio::test]
async fn test_factory_related_color_depths() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            color_depth::Model {
                id: 1,
                factory: 1,
                bits_per_pixel: 16,
            },
            color_depth::Model {
                id: 2,
                factory: 1,
                bits_per_pixel: 24,
            },
        ]])
        .into_connection();

    let result = test_factory()
        .find_related(color_depth::Entity)
        .all(&db)
        .await?;

    let depths: Vec<i32> = result.iter().map(|d| d.bits_per_pixel).collect();
    assert_eq!(depths, vec![16, 24]);

    Ok(())
}

#[tokio::test]
async fn test_factory_with_operating_system() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![(
            test_factory(),
            operating_system::Model {
                id: 1,
                platform: 1,
                name: "Ubuntu".to_owned(),
                version: "24.04".to_owned(),
            },
        )]])
        .into_connection();

    let result = factory::Entity::find()
        .find_also_related(operating_system::Entity)
        .all(&db)
        .await?;

    assert_eq!(result.len(), 1);
    let (factory, operating_system) = &result[0];
    assert_eq!(factory.operating_system, 1);
    assert_eq!(operating_system.as_ref().unwrap().name, "Ubuntu");

    Ok(())
}
