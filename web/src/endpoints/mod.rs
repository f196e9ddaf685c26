/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod links;
pub mod profile;
pub mod projects;
pub mod search;
pub mod skills;
pub mod work;

use axum::extract::Json;
use folio_core::types::HealthResponse;

use crate::error::WebError;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Route not found".to_string())
}

pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
