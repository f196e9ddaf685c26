/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod search;
pub mod types;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    let jwt_secret = if let Some(file) = &cli.jwt_secret_file {
        load_secret(file)?
    } else if let Some(secret) = &cli.jwt_secret {
        secret.clone()
    } else {
        anyhow::bail!("No JWT secret provided");
    };

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}
