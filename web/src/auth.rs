/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use folio_core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::WebError;

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

/// Resolves the bearer token to an account row and attaches it to the
/// request. Every route behind this middleware reads the owner from the
/// extension, never from the request body.
pub async fn authorize(
    State(state): State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| WebError::Unauthorized("Authorization header not found".to_string()))?;

    let auth_header = auth_header
        .to_str()
        .map_err(|_| WebError::Unauthorized("Invalid Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| WebError::Unauthorized("Invalid Authorization header".to_string()))?;

    let token_data = decode_jwt(&state.jwt_secret, token)
        .map_err(|_| WebError::Unauthorized("Unable to decode token".to_string()))?;

    let current_user = EUser::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

pub fn encode_jwt(
    secret: &str,
    id: Uuid,
    session_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = (now + Duration::hours(session_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    encode(
        &Header::default(),
        &Claims { exp, iat, id },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn decode_jwt(
    secret: &str,
    token: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
}

pub async fn update_last_login(db: &DatabaseConnection, user: MUser) -> Result<(), DbErr> {
    let mut auser: AUser = user.into();
    auser.last_login_at = Set(Utc::now().naive_utc());
    auser.update(db).await?;

    Ok(())
}
