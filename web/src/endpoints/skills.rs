/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use entity::skill::SkillCategory;
use folio_core::consts::{DEFAULT_TOP_SKILLS, PROFICIENCY_RANGE};
use folio_core::database::get_skill_by_id;
use folio_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeSkillRequest {
    pub name: String,
    pub proficiency: i32,
    #[serde(default)]
    pub category: Option<SkillCategory>,
    #[serde(default)]
    pub years_of_experience: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TopSkillsParams {
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SkillResponse {
    pub message: String,
    pub skill: MSkill,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SkillsListResponse {
    pub skills: Vec<MSkill>,
}

fn validate(body: &MakeSkillRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if body.name.trim().is_empty() {
        errors.push("Skill name is required".to_string());
    }

    if body.proficiency < *PROFICIENCY_RANGE.start() {
        errors.push("Proficiency must be at least 1".to_string());
    } else if body.proficiency > *PROFICIENCY_RANGE.end() {
        errors.push("Proficiency cannot exceed 10".to_string());
    }

    if body.years_of_experience.is_some_and(|years| years < 0) {
        errors.push("Years of experience cannot be negative".to_string());
    }

    errors
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeSkillRequest>,
) -> WebResult<(StatusCode, Json<SkillResponse>)> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let name = body.name.trim().to_string();

    let existing_skill = ESkill::find()
        .filter(
            Condition::all()
                .add(CSkill::Owner.eq(user.id))
                .add(CSkill::Name.eq(name.clone())),
        )
        .one(&state.db)
        .await?;

    if existing_skill.is_some() {
        return Err(WebError::already_exists("Skill"));
    }

    let now = Utc::now().naive_utc();
    let skill = ASkill {
        id: Set(Uuid::new_v4()),
        owner: Set(user.id),
        name: Set(name),
        proficiency: Set(body.proficiency),
        category: Set(body.category.clone().unwrap_or_default()),
        years_of_experience: Set(body.years_of_experience.unwrap_or(0)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let skill = skill.insert(&state.db).await?;

    let res = SkillResponse {
        message: "Skill added successfully".to_string(),
        skill,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<SkillsListResponse>> {
    let skills = ESkill::find()
        .filter(CSkill::Owner.eq(user.id))
        .order_by_desc(CSkill::Proficiency)
        .order_by_asc(CSkill::Name)
        .all(&state.db)
        .await?;

    Ok(Json(SkillsListResponse { skills }))
}

pub async fn get_top(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Query(params): Query<TopSkillsParams>,
) -> WebResult<Json<SkillsListResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_SKILLS);

    let skills = ESkill::find()
        .filter(CSkill::Owner.eq(user.id))
        .order_by_desc(CSkill::Proficiency)
        .order_by_desc(CSkill::YearsOfExperience)
        .limit(limit)
        .all(&state.db)
        .await?;

    Ok(Json(SkillsListResponse { skills }))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(skill): Path<Uuid>,
    Json(body): Json<MakeSkillRequest>,
) -> WebResult<Json<SkillResponse>> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let existing = get_skill_by_id(&state.db, user.id, skill)
        .await?
        .ok_or_else(|| WebError::not_found("Skill"))?;

    let name = body.name.trim().to_string();

    if name != existing.name {
        let duplicate = ESkill::find()
            .filter(
                Condition::all()
                    .add(CSkill::Owner.eq(user.id))
                    .add(CSkill::Name.eq(name.clone()))
                    .add(CSkill::Id.ne(existing.id)),
            )
            .one(&state.db)
            .await?;

        if duplicate.is_some() {
            return Err(WebError::already_exists("Skill"));
        }
    }

    let mut askill: ASkill = existing.into();
    askill.name = Set(name);
    askill.proficiency = Set(body.proficiency);
    askill.category = Set(body.category.clone().unwrap_or_default());
    askill.years_of_experience = Set(body.years_of_experience.unwrap_or(0));
    askill.updated_at = Set(Utc::now().naive_utc());

    let skill = askill.update(&state.db).await?;

    let res = SkillResponse {
        message: "Skill updated successfully".to_string(),
        skill,
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(skill): Path<Uuid>,
) -> WebResult<Json<MessageResponse>> {
    let skill = get_skill_by_id(&state.db, user.id, skill)
        .await?
        .ok_or_else(|| WebError::not_found("Skill"))?;

    let askill: ASkill = skill.into();
    askill.delete(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Skill deleted successfully".to_string(),
    }))
}
