/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;

use crate::database::*;
use crate::input::check_factory_name;
use crate::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateOperatingSystem {
    pub name: String,
    pub version: String,
    pub platform: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StateScreenSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFactory {
    pub name: String,
    pub admin: String,
    pub architecture: String,
    pub operating_system: String,
    #[serde(default)]
    pub screen_sizes: Vec<StateScreenSize>,
    #[serde(default)]
    pub color_depths: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfiguration {
    #[serde(default)]
    pub architectures: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub operating_systems: Vec<StateOperatingSystem>,
    #[serde(default)]
    pub users: Vec<StateUser>,
    #[serde(default)]
    pub factories: Vec<StateFactory>,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Validation error in field '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub is_valid: bool,
}

fn check_duplicates<'a>(
    section: &str,
    names: impl Iterator<Item = &'a String>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a String> {
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            errors.push(ValidationError {
                field: format!("{}.{}", section, name),
                message: "Duplicate name found".to_string(),
            });
        }
    }

    seen
}

impl StateConfiguration {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file {}", path))?;
        let config: StateConfiguration =
            serde_json::from_str(&content).context("Failed to parse state file")?;
        Ok(config)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        let architectures = check_duplicates("architectures", self.architectures.iter(), &mut errors);
        let platforms = check_duplicates("platforms", self.platforms.iter(), &mut errors);
        let operating_systems = check_duplicates(
            "operating_systems",
            self.operating_systems.iter().map(|os| &os.name),
            &mut errors,
        );
        let users = check_duplicates(
            "users",
            self.users.iter().map(|u| &u.username),
            &mut errors,
        );
        check_duplicates(
            "factories",
            self.factories.iter().map(|f| &f.name),
            &mut errors,
        );

        for os in &self.operating_systems {
            if !platforms.contains(&os.platform) {
                errors.push(ValidationError {
                    field: format!("operating_systems.{}.platform", os.name),
                    message: format!("Platform '{}' does not exist", os.platform),
                });
            }
        }

        for factory in &self.factories {
            if let Err(e) = check_factory_name(&factory.name) {
                errors.push(ValidationError {
                    field: format!("factories.{}.name", factory.name),
                    message: e,
                });
            }

            if !users.contains(&factory.admin) {
                errors.push(ValidationError {
                    field: format!("factories.{}.admin", factory.name),
                    message: format!("User '{}' does not exist", factory.admin),
                });
            }

            if !architectures.contains(&factory.architecture) {
                errors.push(ValidationError {
                    field: format!("factories.{}.architecture", factory.name),
                    message: format!("Architecture '{}' does not exist", factory.architecture),
                });
            }

            if !operating_systems.contains(&factory.operating_system) {
                errors.push(ValidationError {
                    field: format!("factories.{}.operating_system", factory.name),
                    message: format!(
                        "Operating system '{}' does not exist",
                        factory.operating_system
                    ),
                });
            }

            for size in &factory.screen_sizes {
                if size.width <= 0 || size.height <= 0 {
                    errors.push(ValidationError {
                        field: format!("factories.{}.screen_sizes", factory.name),
                        message: format!("Invalid screen size {}x{}", size.width, size.height),
                    });
                }
            }

            for depth in &factory.color_depths {
                if *depth <= 0 {
                    errors.push(ValidationError {
                        field: format!("factories.{}.color_depths", factory.name),
                        message: format!("Invalid color depth {}", depth),
                    });
                }
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub async fn load_and_apply_state(
    db: &DatabaseConnection,
    state_file_path: Option<&str>,
) -> Result<()> {
    let Some(path) = state_file_path else {
        tracing::info!("No state file configured, skipping state management");
        return Ok(());
    };

    tracing::info!("Loading state configuration from: {}", path);

    let config = StateConfiguration::from_file(path)?;
    apply_state(db, &config).await
}

pub async fn apply_state(db: &DatabaseConnection, config: &StateConfiguration) -> Result<()> {
    let validation = config.validate();
    if !validation.is_valid {
        let error_messages: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();

        anyhow::bail!(
            "State configuration validation failed:\n{}",
            error_messages.join("\n")
        );
    }

    let txn = db.begin().await?;

    let architectures = apply_architectures(&txn, &config.architectures).await?;
    let platforms = apply_platforms(&txn, &config.platforms).await?;
    let operating_systems =
        apply_operating_systems(&txn, &config.operating_systems, &platforms).await?;
    let users = apply_users(&txn, &config.users).await?;

    for state_factory in &config.factories {
        let factory = match get_factory_by_name(&txn, &state_factory.name).await? {
            Some(factory) => factory,
            None => {
                create_factory(
                    &txn,
                    &state_factory.name,
                    users[&state_factory.admin],
                    architectures[&state_factory.architecture],
                    operating_systems[&state_factory.operating_system],
                )
                .await?
            }
        };

        let sizes = screen_sizes(&txn, factory.id, &[]).await?;
        for size in &state_factory.screen_sizes {
            if !sizes
                .iter()
                .any(|s| s.width == size.width && s.height == size.height)
            {
                create_screen_size(&txn, factory.id, size.width, size.height).await?;
            }
        }

        let depths = color_depths(&txn, factory.id, &[]).await?;
        for depth in &state_factory.color_depths {
            if !depths.iter().any(|d| d.bits_per_pixel == *depth) {
                create_color_depth(&txn, factory.id, *depth).await?;
            }
        }
    }

    txn.commit().await?;

    tracing::info!(
        factories = config.factories.len(),
        "State applied successfully"
    );

    Ok(())
}

async fn apply_architectures<C: ConnectionTrait>(
    db: &C,
    names: &[String],
) -> Result<HashMap<String, i32>> {
    let mut map = HashMap::new();

    for name in names {
        let existing = EArchitecture::find()
            .filter(CArchitecture::Name.eq(name))
            .one(db)
            .await?;

        let architecture = match existing {
            Some(architecture) => architecture,
            None => create_architecture(db, name).await?,
        };

        map.insert(name.clone(), architecture.id);
    }

    Ok(map)
}

async fn apply_platforms<C: ConnectionTrait>(
    db: &C,
    names: &[String],
) -> Result<HashMap<String, i32>> {
    let mut map = HashMap::new();

    for name in names {
        let existing = EPlatform::find()
            .filter(CPlatform::Name.eq(name))
            .one(db)
            .await?;

        let platform = match existing {
            Some(platform) => platform,
            None => create_platform(db, name).await?,
        };

        map.insert(name.clone(), platform.id);
    }

    Ok(map)
}

async fn apply_operating_systems<C: ConnectionTrait>(
    db: &C,
    state_systems: &[StateOperatingSystem],
    platforms: &HashMap<String, i32>,
) -> Result<HashMap<String, i32>> {
    let mut map = HashMap::new();

    for state_os in state_systems {
        let platform = platforms[&state_os.platform];

        let existing = EOperatingSystem::find()
            .filter(COperatingSystem::Platform.eq(platform))
            .filter(COperatingSystem::Name.eq(&state_os.name))
            .filter(COperatingSystem::Version.eq(&state_os.version))
            .one(db)
            .await?;

        let operating_system = match existing {
            Some(operating_system) => operating_system,
            None => {
                create_operating_system(db, platform, &state_os.name, &state_os.version).await?
            }
        };

        map.insert(state_os.name.clone(), operating_system.id);
    }

    Ok(map)
}

async fn apply_users<C: ConnectionTrait>(
    db: &C,
    state_users: &[StateUser],
) -> Result<HashMap<String, i32>> {
    let mut map = HashMap::new();

    for state_user in state_users {
        let existing = EUser::find()
            .filter(CUser::Username.eq(&state_user.username))
            .one(db)
            .await?;

        let user = match existing {
            Some(user) => user,
            None => {
                let user = create_user(db, &state_user.username, &state_user.email).await?;
                tracing::info!("Created user: {}", state_user.username);
                user
            }
        };

        map.insert(state_user.username.clone(), user.id);
    }

    Ok(map)
}
