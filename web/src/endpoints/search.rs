/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Cross-collection search: the four collection queries run concurrently
//! and their results are merged into a single response.

use axum::extract::{Query, State};
use axum::{Extension, Json};
use folio_core::search::{profile_matches, project_matches, skill_matches, work_matches};
use folio_core::types::*;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub profiles: Vec<MProfile>,
    pub skills: Vec<MSkill>,
    pub projects: Vec<MProject>,
    pub work_experiences: Vec<MWorkExperience>,
    pub total_results: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub query: String,
    pub results: SearchResults,
}

// Each collection is fetched in insertion order and filtered in memory, so
// the query string is never interpolated into SQL or compiled as a pattern.

async fn search_profiles(
    db: &DatabaseConnection,
    owner: Uuid,
    query: &str,
) -> Result<Vec<MProfile>, DbErr> {
    let mut profiles = EProfile::find()
        .filter(CProfile::Owner.eq(owner))
        .order_by_asc(CProfile::CreatedAt)
        .all(db)
        .await?;
    profiles.retain(|profile| profile_matches(profile, query));
    Ok(profiles)
}

async fn search_skills(
    db: &DatabaseConnection,
    owner: Uuid,
    query: &str,
) -> Result<Vec<MSkill>, DbErr> {
    let mut skills = ESkill::find()
        .filter(CSkill::Owner.eq(owner))
        .order_by_asc(CSkill::CreatedAt)
        .all(db)
        .await?;
    skills.retain(|skill| skill_matches(skill, query));
    Ok(skills)
}

async fn search_projects(
    db: &DatabaseConnection,
    owner: Uuid,
    query: &str,
) -> Result<Vec<MProject>, DbErr> {
    let mut projects = EProject::find()
        .filter(CProject::Owner.eq(owner))
        .order_by_asc(CProject::CreatedAt)
        .all(db)
        .await?;
    projects.retain(|project| project_matches(project, query));
    Ok(projects)
}

async fn search_work(
    db: &DatabaseConnection,
    owner: Uuid,
    query: &str,
) -> Result<Vec<MWorkExperience>, DbErr> {
    let mut work = EWorkExperience::find()
        .filter(CWorkExperience::Owner.eq(owner))
        .order_by_asc(CWorkExperience::CreatedAt)
        .all(db)
        .await?;
    work.retain(|entry| work_matches(entry, query));
    Ok(work)
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Query(params): Query<SearchParams>,
) -> WebResult<Json<SearchResponse>> {
    // Matching uses the trimmed query; the response echoes it as received.
    let raw = params.q.unwrap_or_default();
    let query = raw.trim();
    if query.is_empty() {
        return Err(WebError::BadRequest("Search query is required".to_string()));
    }

    let (profiles, skills, projects, work_experiences) = tokio::try_join!(
        search_profiles(&state.db, user.id, query),
        search_skills(&state.db, user.id, query),
        search_projects(&state.db, user.id, query),
        search_work(&state.db, user.id, query),
    )?;

    let total_results = profiles.len() + skills.len() + projects.len() + work_experiences.len();

    let res = SearchResponse {
        query: raw,
        results: SearchResults {
            profiles,
            skills,
            projects,
            work_experiences,
            total_results,
        },
    };

    Ok(Json(res))
}
