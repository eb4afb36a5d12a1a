/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::error::DbError;
use super::input::FieldLookup;
use super::query_log::capture_queries;
use super::types::*;

pub fn database_url(cli: &Cli) -> Result<String> {
    if let Some(file) = &cli.database_url_file {
        let url = std::fs::read_to_string(file).context("Failed to read database url from file")?;
        Ok(url.trim().to_string())
    } else if let Some(url) = &cli.database_url {
        Ok(url.clone())
    } else {
        anyhow::bail!("No database url provided")
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

pub fn connect_options(cli: &Cli, db_url: String) -> ConnectOptions {
    let memory = is_memory_url(&db_url);
    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging in debug mode
    if cli.debug {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    if memory {
        // every pooled connection would open its own empty database
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cli.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(8))
            .max_lifetime(Duration::from_secs(8));
    }

    opt
}

/// Connects, installs query capture when requested and brings the schema up
/// to date.
pub async fn open_database(
    opt: ConnectOptions,
    capture: bool,
) -> Result<DatabaseConnection, DbErr> {
    let mut db = Database::connect(opt).await?;

    if capture {
        capture_queries(&mut db);
    }

    Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = database_url(cli)?;
    let opt = connect_options(cli, db_url);

    let db = open_database(opt, cli.debug)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(backend = ?db.get_database_backend(), "Database ready");
    Ok(db)
}

pub async fn create_user<C: ConnectionTrait>(
    db: &C,
    username: &str,
    email: &str,
) -> Result<MUser, DbError> {
    let auser = AUser {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(auser.insert(db).await?)
}

pub async fn create_architecture<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<MArchitecture, DbError> {
    let aarchitecture = AArchitecture {
        name: Set(name.to_string()),
        ..Default::default()
    };

    Ok(aarchitecture.insert(db).await?)
}

pub async fn create_platform<C: ConnectionTrait>(db: &C, name: &str) -> Result<MPlatform, DbError> {
    let aplatform = APlatform {
        name: Set(name.to_string()),
        ..Default::default()
    };

    Ok(aplatform.insert(db).await?)
}

pub async fn create_operating_system<C: ConnectionTrait>(
    db: &C,
    platform: i32,
    name: &str,
    version: &str,
) -> Result<MOperatingSystem, DbError> {
    let aoperating_system = AOperatingSystem {
        platform: Set(platform),
        name: Set(name.to_string()),
        version: Set(version.to_string()),
        ..Default::default()
    };

    Ok(aoperating_system.insert(db).await?)
}

pub async fn create_factory<C: ConnectionTrait>(
    db: &C,
    name: &str,
    admin: i32,
    architecture: i32,
    operating_system: i32,
) -> Result<MFactory, DbError> {
    let afactory = AFactory {
        name: Set(name.to_string()),
        admin: Set(admin),
        architecture: Set(architecture),
        operating_system: Set(operating_system),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let factory = afactory.insert(db).await?;
    tracing::debug!(factory = %factory.name, id = factory.id, "Created factory");
    Ok(factory)
}

pub async fn save_factory<C: ConnectionTrait>(
    db: &C,
    factory: AFactory,
) -> Result<MFactory, DbError> {
    Ok(factory.update(db).await?)
}

pub async fn create_screen_size<C: ConnectionTrait>(
    db: &C,
    factory: i32,
    width: i32,
    height: i32,
) -> Result<MScreenSize, DbError> {
    let ascreen_size = AScreenSize {
        factory: Set(factory),
        width: Set(width),
        height: Set(height),
        ..Default::default()
    };

    Ok(ascreen_size.insert(db).await?)
}

pub async fn create_color_depth<C: ConnectionTrait>(
    db: &C,
    factory: i32,
    bits_per_pixel: i32,
) -> Result<MColorDepth, DbError> {
    let acolor_depth = AColorDepth {
        factory: Set(factory),
        bits_per_pixel: Set(bits_per_pixel),
        ..Default::default()
    };

    Ok(acolor_depth.insert(db).await?)
}

pub async fn get_factory_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<MFactory>, DbError> {
    Ok(EFactory::find()
        .filter(CFactory::Name.eq(name))
        .one(db)
        .await?)
}

pub async fn count_factories_named<C: ConnectionTrait>(db: &C, name: &str) -> Result<u64, DbError> {
    Ok(EFactory::find()
        .filter(CFactory::Name.eq(name))
        .count(db)
        .await?)
}

pub async fn list_factories<C: ConnectionTrait>(db: &C) -> Result<Vec<MFactory>, DbError> {
    Ok(EFactory::find()
        .order_by_asc(CFactory::Name)
        .all(db)
        .await?)
}

/// Removes the factory together with its color depths and screen sizes.
pub async fn delete_factory(db: &DatabaseConnection, factory: MFactory) -> Result<(), DbError> {
    let txn = db.begin().await?;

    EColorDepth::delete_many()
        .filter(CColorDepth::Factory.eq(factory.id))
        .exec(&txn)
        .await?;

    EScreenSize::delete_many()
        .filter(CScreenSize::Factory.eq(factory.id))
        .exec(&txn)
        .await?;

    let name = factory.name.clone();
    factory.delete(&txn).await?;
    txn.commit().await?;

    tracing::debug!(factory = %name, "Deleted factory");
    Ok(())
}

fn lookup_condition<C>(lookups: &[FieldLookup]) -> Result<Condition, DbError>
where
    C: ColumnTrait + FromStr,
{
    let mut condition = Condition::all();

    for lookup in lookups {
        let column = C::from_str(&lookup.field).map_err(|_| {
            DbError::Database(DbErr::Custom(format!("unknown field `{}`", lookup.field)))
        })?;

        condition = condition.add(lookup.lookup.condition(column, lookup.value));
    }

    Ok(condition)
}

pub async fn screen_sizes<C: ConnectionTrait>(
    db: &C,
    factory: i32,
    lookups: &[FieldLookup],
) -> Result<Vec<MScreenSize>, DbError> {
    let condition = lookup_condition::<CScreenSize>(lookups)?;

    Ok(EScreenSize::find()
        .filter(CScreenSize::Factory.eq(factory))
        .filter(condition)
        .order_by_asc(CScreenSize::Width)
        .order_by_asc(CScreenSize::Height)
        .all(db)
        .await?)
}

pub async fn color_depths<C: ConnectionTrait>(
    db: &C,
    factory: i32,
    lookups: &[FieldLookup],
) -> Result<Vec<MColorDepth>, DbError> {
    let condition = lookup_condition::<CColorDepth>(lookups)?;

    Ok(EColorDepth::find()
        .filter(CColorDepth::Factory.eq(factory))
        .filter(condition)
        .order_by_asc(CColorDepth::BitsPerPixel)
        .all(db)
        .await?)
}
