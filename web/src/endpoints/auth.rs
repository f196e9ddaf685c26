/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use email_address::EmailAddress;
use folio_core::consts::*;
use folio_core::input::check_index_name;
use folio_core::types::*;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::encode_jwt;
use crate::auth::update_last_login;
use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub loginname: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeUserRequest>,
) -> WebResult<(StatusCode, Json<RegisterResponse>)> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if check_index_name(body.username.as_str()).is_err() {
        return Err(WebError::BadRequest("Invalid username".to_string()));
    }

    if !EmailAddress::is_valid(body.email.as_str()) {
        return Err(WebError::BadRequest("Invalid email".to_string()));
    }

    if body.password.len() < 8 {
        return Err(WebError::BadRequest(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    let existing_user = EUser::find()
        .filter(
            Condition::any()
                .add(CUser::Username.eq(body.username.clone()))
                .add(CUser::Email.eq(body.email.clone())),
        )
        .one(&state.db)
        .await?;

    if existing_user.is_some() {
        return Err(WebError::Conflict("User already exists".to_string()));
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        username: Set(body.username.clone()),
        name: Set(body.name.clone()),
        email: Set(body.email.to_lowercase()),
        password: Set(generate_hash(&body.password)),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&state.db).await?;

    let res = RegisterResponse {
        message: "User registered successfully".to_string(),
        id: user.id,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeLoginRequest>,
) -> WebResult<Json<LoginResponse>> {
    let user = EUser::find()
        .filter(
            Condition::any()
                .add(CUser::Username.eq(body.loginname.clone()))
                .add(CUser::Email.eq(body.loginname.to_lowercase())),
        )
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(body.password, &user.password).map_err(|_| WebError::invalid_credentials())?;

    let token = encode_jwt(&state.jwt_secret, user.id, state.cli.session_hours)
        .map_err(|_| WebError::failed_to_generate_token())?;

    update_last_login(&state.db, user).await?;

    let res = LoginResponse {
        message: "Login successful".to_string(),
        token,
    };

    Ok(Json(res))
}
