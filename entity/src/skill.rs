/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum SkillCategory {
    #[sea_orm(string_value = "Programming")]
    Programming,
    #[sea_orm(string_value = "Framework")]
    Framework,
    #[sea_orm(string_value = "Database")]
    Database,
    #[sea_orm(string_value = "Tool")]
    Tool,
    #[sea_orm(string_value = "Language")]
    Language,
    #[sea_orm(string_value = "Other")]
    Other,
}

impl Default for SkillCategory {
    fn default() -> Self {
        SkillCategory::Other
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "skill")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub owner: Uuid,
    pub name: String,
    pub proficiency: i32,
    pub category: SkillCategory,
    pub years_of_experience: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Owner",
        to = "super::user::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
