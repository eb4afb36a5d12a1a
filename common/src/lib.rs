/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod error;
pub mod input;
pub mod query_log;
pub mod state;
pub mod templatetags;
pub mod types;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Shotserver on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;
    state::load_and_apply_state(&db, cli.state_file.as_deref()).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
