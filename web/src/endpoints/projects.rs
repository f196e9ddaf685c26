/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{NaiveDate, Utc};
use entity::project::{ProjectLink, ProjectLinkList, ProjectStatus};
use folio_core::consts::MAX_DESCRIPTION_LENGTH;
use folio_core::database::get_project_by_id;
use folio_core::input::valid_http_url;
use folio_core::search::any_tag_matches;
use folio_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub featured: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ListProjectsParams {
    pub skill: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectResponse {
    pub message: String,
    pub project: MProject,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GetProjectResponse {
    pub project: MProject,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectsListResponse {
    pub projects: Vec<MProject>,
}

fn validate(body: &MakeProjectRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if body.title.trim().is_empty() {
        errors.push("Project title is required".to_string());
    }

    if body.description.trim().is_empty() {
        errors.push("Project description is required".to_string());
    } else if body.description.chars().count() > MAX_DESCRIPTION_LENGTH {
        errors.push("Description cannot exceed 1000 characters".to_string());
    }

    for link in &body.links {
        if !valid_http_url(&link.url) {
            errors.push("Please enter a valid URL".to_string());
        }
    }

    errors
}

fn trimmed_tags(tags: &[String]) -> Vec<String> {
    tags.iter().map(|tag| tag.trim().to_string()).collect()
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeProjectRequest>,
) -> WebResult<(StatusCode, Json<ProjectResponse>)> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let now = Utc::now().naive_utc();
    let project = AProject {
        id: Set(Uuid::new_v4()),
        owner: Set(user.id),
        title: Set(body.title.trim().to_string()),
        description: Set(body.description.clone()),
        skills: Set(trimmed_tags(&body.skills)),
        links: Set(ProjectLinkList(body.links.clone())),
        status: Set(body.status.clone().unwrap_or_default()),
        start_date: Set(body.start_date),
        end_date: Set(body.end_date),
        featured: Set(body.featured.unwrap_or(false)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let project = project.insert(&state.db).await?;

    let res = ProjectResponse {
        message: "Project added successfully".to_string(),
        project,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Query(params): Query<ListProjectsParams>,
) -> WebResult<Json<ProjectsListResponse>> {
    let mut projects = EProject::find()
        .filter(CProject::Owner.eq(user.id))
        .order_by_desc(CProject::Featured)
        .order_by_desc(CProject::CreatedAt)
        .all(&state.db)
        .await?;

    // Optional case-insensitive substring filter on the tag list
    if let Some(skill) = params.skill.as_deref() {
        projects.retain(|project| any_tag_matches(&project.skills, skill));
    }

    Ok(Json(ProjectsListResponse { projects }))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project): Path<Uuid>,
) -> WebResult<Json<GetProjectResponse>> {
    let project = get_project_by_id(&state.db, user.id, project)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    Ok(Json(GetProjectResponse { project }))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project): Path<Uuid>,
    Json(body): Json<MakeProjectRequest>,
) -> WebResult<Json<ProjectResponse>> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let existing = get_project_by_id(&state.db, user.id, project)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let mut aproject: AProject = existing.into();
    aproject.title = Set(body.title.trim().to_string());
    aproject.description = Set(body.description.clone());
    aproject.skills = Set(trimmed_tags(&body.skills));
    aproject.links = Set(ProjectLinkList(body.links.clone()));
    aproject.status = Set(body.status.clone().unwrap_or_default());
    aproject.start_date = Set(body.start_date);
    aproject.end_date = Set(body.end_date);
    aproject.featured = Set(body.featured.unwrap_or(false));
    aproject.updated_at = Set(Utc::now().naive_utc());

    let project = aproject.update(&state.db).await?;

    let res = ProjectResponse {
        message: "Project updated successfully".to_string(),
        project,
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project): Path<Uuid>,
) -> WebResult<Json<MessageResponse>> {
    let project = get_project_by_id(&state.db, user.id, project)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let aproject: AProject = project.into();
    aproject.delete(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
