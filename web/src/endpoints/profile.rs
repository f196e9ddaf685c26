/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use entity::profile::{Education, EducationList};
use folio_core::consts::MAX_BIO_LENGTH;
use folio_core::database::get_profile_by_owner;
use folio_core::input::valid_http_url;
use folio_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::ActiveModelTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub message: String,
    pub profile: MProfile,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GetProfileResponse {
    pub profile: MProfile,
}

fn validate(body: &MakeProfileRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if body.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }

    if body.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    }

    if let Some(bio) = &body.bio {
        if bio.chars().count() > MAX_BIO_LENGTH {
            errors.push("Bio cannot exceed 500 characters".to_string());
        }
    }

    if let Some(website) = &body.website {
        if !valid_http_url(website) {
            errors.push("Please enter a valid website URL".to_string());
        }
    }

    for entry in &body.education {
        if entry.institution.trim().is_empty() {
            errors.push("Education institution is required".to_string());
        }
        if entry.degree.trim().is_empty() {
            errors.push("Education degree is required".to_string());
        }
    }

    errors
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeProfileRequest>,
) -> WebResult<(StatusCode, Json<ProfileResponse>)> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let existing_profile = get_profile_by_owner(&state.db, user.id).await?;
    if existing_profile.is_some() {
        return Err(WebError::Conflict(
            "Profile already exists. Use PUT to update.".to_string(),
        ));
    }

    let now = Utc::now().naive_utc();
    let profile = AProfile {
        id: Set(Uuid::new_v4()),
        owner: Set(user.id),
        name: Set(body.name.trim().to_string()),
        email: Set(body.email.to_lowercase()),
        bio: Set(body.bio.clone()),
        location: Set(body.location.clone()),
        phone: Set(body.phone.clone()),
        website: Set(body.website.clone()),
        education: Set(EducationList(body.education.clone())),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let profile = profile.insert(&state.db).await?;

    let res = ProfileResponse {
        message: "Profile created successfully".to_string(),
        profile,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<GetProfileResponse>> {
    let profile = get_profile_by_owner(&state.db, user.id)
        .await?
        .ok_or_else(|| WebError::not_found("Profile"))?;

    Ok(Json(GetProfileResponse { profile }))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeProfileRequest>,
) -> WebResult<Json<ProfileResponse>> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let profile = get_profile_by_owner(&state.db, user.id)
        .await?
        .ok_or_else(|| WebError::not_found("Profile"))?;

    let mut aprofile: AProfile = profile.into();
    aprofile.name = Set(body.name.trim().to_string());
    aprofile.email = Set(body.email.to_lowercase());
    aprofile.bio = Set(body.bio.clone());
    aprofile.location = Set(body.location.clone());
    aprofile.phone = Set(body.phone.clone());
    aprofile.website = Set(body.website.clone());
    aprofile.education = Set(EducationList(body.education.clone()));
    aprofile.updated_at = Set(Utc::now().naive_utc());

    let profile = aprofile.update(&state.db).await?;

    let res = ProfileResponse {
        message: "Profile updated successfully".to_string(),
        profile,
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<MessageResponse>> {
    let profile = get_profile_by_owner(&state.db, user.id)
        .await?
        .ok_or_else(|| WebError::not_found("Profile"))?;

    let aprofile: AProfile = profile.into();
    aprofile.delete(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Profile deleted successfully".to_string(),
    }))
}
