/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Folio", display_name = "Folio", bin_name = "folio-server", author = "Folio Authors", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "FOLIO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "FOLIO_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "FOLIO_PORT", value_parser = port_in_range, default_value_t = 5000)]
    pub port: u16,
    #[arg(long, env = "FOLIO_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "FOLIO_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "FOLIO_JWT_SECRET")]
    pub jwt_secret: Option<String>,
    #[arg(long, env = "FOLIO_JWT_SECRET_FILE")]
    pub jwt_secret_file: Option<String>,
    #[arg(long, env = "FOLIO_SESSION_HOURS", value_parser = greater_than_zero::<i64>, default_value = "24")]
    pub session_hours: i64,
    #[arg(long, env = "FOLIO_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

pub type EUser = user::Entity;
pub type EProfile = profile::Entity;
pub type ESkill = skill::Entity;
pub type EProject = project::Entity;
pub type EWorkExperience = work_experience::Entity;
pub type ELinkSet = link_set::Entity;

pub type MUser = user::Model;
pub type MProfile = profile::Model;
pub type MSkill = skill::Model;
pub type MProject = project::Model;
pub type MWorkExperience = work_experience::Model;
pub type MLinkSet = link_set::Model;

pub type AUser = user::ActiveModel;
pub type AProfile = profile::ActiveModel;
pub type ASkill = skill::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AWorkExperience = work_experience::ActiveModel;
pub type ALinkSet = link_set::ActiveModel;

pub type CUser = user::Column;
pub type CProfile = profile::Column;
pub type CSkill = skill::Column;
pub type CProject = project::Column;
pub type CWorkExperience = work_experience::Column;
pub type CLinkSet = link_set::Column;
