/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use entity::link_set::{OtherLink, OtherLinkList};
use folio_core::database::get_link_set_by_owner;
use folio_core::input::{valid_http_url, valid_platform_url};
use folio_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::ActiveModelTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLinksRequest {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub other: Vec<OtherLink>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LinksResponse {
    pub message: String,
    pub links: MLinkSet,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GetLinksResponse {
    pub links: MLinkSet,
}

fn validate(body: &MakeLinksRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(github) = &body.github {
        if !valid_platform_url(github, "github.com") {
            errors.push("Please enter a valid GitHub URL".to_string());
        }
    }

    if let Some(linkedin) = &body.linkedin {
        if !valid_platform_url(linkedin, "linkedin.com") {
            errors.push("Please enter a valid LinkedIn URL".to_string());
        }
    }

    if let Some(twitter) = &body.twitter {
        if !valid_platform_url(twitter, "twitter.com") {
            errors.push("Please enter a valid Twitter URL".to_string());
        }
    }

    if let Some(portfolio) = &body.portfolio {
        if !valid_http_url(portfolio) {
            errors.push("Please enter a valid portfolio URL".to_string());
        }
    }

    if let Some(website) = &body.website {
        if !valid_http_url(website) {
            errors.push("Please enter a valid website URL".to_string());
        }
    }

    for entry in &body.other {
        if entry.label.trim().is_empty() {
            errors.push("Link label is required".to_string());
        }
        if !valid_http_url(&entry.url) {
            errors.push("Please enter a valid URL".to_string());
        }
    }

    errors
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeLinksRequest>,
) -> WebResult<(StatusCode, Json<LinksResponse>)> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let existing_links = get_link_set_by_owner(&state.db, user.id).await?;
    if existing_links.is_some() {
        return Err(WebError::Conflict(
            "Links already exist. Use PUT to update.".to_string(),
        ));
    }

    let now = Utc::now().naive_utc();
    let links = ALinkSet {
        id: Set(Uuid::new_v4()),
        owner: Set(user.id),
        github: Set(body.github.clone()),
        linkedin: Set(body.linkedin.clone()),
        portfolio: Set(body.portfolio.clone()),
        twitter: Set(body.twitter.clone()),
        website: Set(body.website.clone()),
        other: Set(OtherLinkList(body.other.clone())),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let links = links.insert(&state.db).await?;

    let res = LinksResponse {
        message: "Links added successfully".to_string(),
        links,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<GetLinksResponse>> {
    let links = get_link_set_by_owner(&state.db, user.id)
        .await?
        .ok_or_else(|| WebError::not_found("Links"))?;

    Ok(Json(GetLinksResponse { links }))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeLinksRequest>,
) -> WebResult<Json<LinksResponse>> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(WebError::Validation(errors));
    }

    let links = get_link_set_by_owner(&state.db, user.id)
        .await?
        .ok_or_else(|| WebError::not_found("Links"))?;

    let mut alinks: ALinkSet = links.into();
    alinks.github = Set(body.github.clone());
    alinks.linkedin = Set(body.linkedin.clone());
    alinks.portfolio = Set(body.portfolio.clone());
    alinks.twitter = Set(body.twitter.clone());
    alinks.website = Set(body.website.clone());
    alinks.other = Set(OtherLinkList(body.other.clone()));
    alinks.updated_at = Set(Utc::now().naive_utc());

    let links = alinks.update(&state.db).await?;

    let res = LinksResponse {
        message: "Links updated successfully".to_string(),
        links,
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<MessageResponse>> {
    let links = get_link_set_by_owner(&state.db, user.id)
        .await?
        .ok_or_else(|| WebError::not_found("Links"))?;

    let alinks: ALinkSet = links.into();
    alinks.delete(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Links deleted successfully".to_string(),
    }))
}
