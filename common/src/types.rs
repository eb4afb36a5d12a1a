/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Shotserver", display_name = "Shotserver", bin_name = "shotserver", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "SHOTSERVER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SHOTSERVER_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "SHOTSERVER_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "SHOTSERVER_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "SHOTSERVER_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "SHOTSERVER_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "SHOTSERVER_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub max_connections: u32,
    #[arg(long, env = "SHOTSERVER_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "SHOTSERVER_STATE_FILE")]
    pub state_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: i32,
    pub name: String,
}

pub type ListResponse = Vec<ListItem>;

pub type EArchitecture = architecture::Entity;
pub type EColorDepth = color_depth::Entity;
pub type EFactory = factory::Entity;
pub type EOperatingSystem = operating_system::Entity;
pub type EPlatform = platform::Entity;
pub type EScreenSize = screen_size::Entity;
pub type EUser = user::Entity;

pub type MArchitecture = architecture::Model;
pub type MColorDepth = color_depth::Model;
pub type MFactory = factory::Model;
pub type MOperatingSystem = operating_system::Model;
pub type MPlatform = platform::Model;
pub type MScreenSize = screen_size::Model;
pub type MUser = user::Model;

pub type AArchitecture = architecture::ActiveModel;
pub type AColorDepth = color_depth::ActiveModel;
pub type AFactory = factory::ActiveModel;
pub type AOperatingSystem = operating_system::ActiveModel;
pub type APlatform = platform::ActiveModel;
pub type AScreenSize = screen_size::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CArchitecture = architecture::Column;
pub type CColorDepth = color_depth::Column;
pub type CFactory = factory::Column;
pub type COperatingSystem = operating_system::Column;
pub type CPlatform = platform::Column;
pub type CScreenSize = screen_size::Column;
pub type CUser = user::Column;
