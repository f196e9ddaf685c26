/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    Ok(db)
}

// Every lookup below is scoped by the owning account. The owner id is a
// mandatory parameter so ownership enforcement cannot be bypassed by a
// caller forgetting to filter.

pub async fn get_profile_by_owner(
    db: &DatabaseConnection,
    owner: Uuid,
) -> Result<Option<MProfile>, DbErr> {
    EProfile::find()
        .filter(CProfile::Owner.eq(owner))
        .one(db)
        .await
}

pub async fn get_link_set_by_owner(
    db: &DatabaseConnection,
    owner: Uuid,
) -> Result<Option<MLinkSet>, DbErr> {
    ELinkSet::find()
        .filter(CLinkSet::Owner.eq(owner))
        .one(db)
        .await
}

pub async fn get_skill_by_id(
    db: &DatabaseConnection,
    owner: Uuid,
    id: Uuid,
) -> Result<Option<MSkill>, DbErr> {
    ESkill::find_by_id(id)
        .filter(CSkill::Owner.eq(owner))
        .one(db)
        .await
}

pub async fn get_project_by_id(
    db: &DatabaseConnection,
    owner: Uuid,
    id: Uuid,
) -> Result<Option<MProject>, DbErr> {
    EProject::find_by_id(id)
        .filter(CProject::Owner.eq(owner))
        .one(db)
        .await
}

pub async fn get_work_experience_by_id(
    db: &DatabaseConnection,
    owner: Uuid,
    id: Uuid,
) -> Result<Option<MWorkExperience>, DbErr> {
    EWorkExperience::find_by_id(id)
        .filter(CWorkExperience::Owner.eq(owner))
        .one(db)
        .await
}
