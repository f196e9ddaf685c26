/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{NaiveDate, Utc};
use entity::work_experience::EmploymentType;
use folio_core::consts::MAX_DESCRIPTION_LENGTH;
use folio_core::database::get_work_experience_by_id;
use folio_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeWorkRequest {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WorkResponse {
    pub message: String,
    pub work: MWorkExperience,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GetWorkResponse {
    pub work: MWorkExperience,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorkListResponse {
    pub work_experiences: Vec<MWorkExperience>,
}

fn validate(body: &MakeWorkRequest) -> Result<NaiveDate, Vec<String>> {
    let mut errors = Vec::new();

    if body.company.trim().is_empty() {
        errors.push("Company name is required".to_string());
    }

    if body.position.trim().is_empty() {
        errors.push("Position is required".to_string());
    }

    if let Some(description) = &body.description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            errors.push("Description cannot exceed 1000 characters".to_string());
        }
    }

    let Some(start_date) = body.start_date else {
        errors.push("Start date is required".to_string());
        return Err(errors);
    };

    if errors.is_empty() {
        Ok(start_date)
    } else {
        Err(errors)
    }
}

fn trimmed_tags(tags: &[String]) -> Vec<String> {
    tags.iter().map(|tag| tag.trim().to_string()).collect()
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeWorkRequest>,
) -> WebResult<(StatusCode, Json<WorkResponse>)> {
    let start_date = validate(&body).map_err(WebError::Validation)?;

    let now = Utc::now().naive_utc();
    let work = AWorkExperience {
        id: Set(Uuid::new_v4()),
        owner: Set(user.id),
        company: Set(body.company.trim().to_string()),
        position: Set(body.position.trim().to_string()),
        description: Set(body.description.clone()),
        start_date: Set(start_date),
        end_date: Set(body.end_date),
        current: Set(body.current.unwrap_or(false)),
        location: Set(body.location.clone()),
        employment_type: Set(body.employment_type.clone().unwrap_or_default()),
        skills: Set(trimmed_tags(&body.skills)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let work = work.insert(&state.db).await?;

    let res = WorkResponse {
        message: "Work experience added successfully".to_string(),
        work,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<WorkListResponse>> {
    let work_experiences = EWorkExperience::find()
        .filter(CWorkExperience::Owner.eq(user.id))
        .order_by_desc(CWorkExperience::StartDate)
        .all(&state.db)
        .await?;

    Ok(Json(WorkListResponse { work_experiences }))
}

pub async fn get_work(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(work): Path<Uuid>,
) -> WebResult<Json<GetWorkResponse>> {
    let work = get_work_experience_by_id(&state.db, user.id, work)
        .await?
        .ok_or_else(|| WebError::not_found("Work experience"))?;

    Ok(Json(GetWorkResponse { work }))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(work): Path<Uuid>,
    Json(body): Json<MakeWorkRequest>,
) -> WebResult<Json<WorkResponse>> {
    let start_date = validate(&body).map_err(WebError::Validation)?;

    let existing = get_work_experience_by_id(&state.db, user.id, work)
        .await?
        .ok_or_else(|| WebError::not_found("Work experience"))?;

    let mut awork: AWorkExperience = existing.into();
    awork.company = Set(body.company.trim().to_string());
    awork.position = Set(body.position.trim().to_string());
    awork.description = Set(body.description.clone());
    awork.start_date = Set(start_date);
    awork.end_date = Set(body.end_date);
    awork.current = Set(body.current.unwrap_or(false));
    awork.location = Set(body.location.clone());
    awork.employment_type = Set(body.employment_type.clone().unwrap_or_default());
    awork.skills = Set(trimmed_tags(&body.skills));
    awork.updated_at = Set(Utc::now().naive_utc());

    let work = awork.update(&state.db).await?;

    let res = WorkResponse {
        message: "Work experience updated successfully".to_string(),
        work,
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(work): Path<Uuid>,
) -> WebResult<Json<MessageResponse>> {
    let work = get_work_experience_by_id(&state.db, user.id, work)
        .await?
        .ok_or_else(|| WebError::not_found("Work experience"))?;

    let awork: AWorkExperience = work.into();
    awork.delete(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Work experience deleted successfully".to_string(),
    }))
}
