/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::user;
use folio_core::consts::NULL_TIME;
use folio_core::types::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret";

#[allow(dead_code)]
pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 5000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret: Some(TEST_JWT_SECRET.to_string()),
        jwt_secret_file: None,
        session_hours: 24,
        disable_registration: false,
    }
}

#[allow(dead_code)]
pub fn state_with(db: DatabaseConnection, cli: Cli) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli,
        jwt_secret: TEST_JWT_SECRET.to_string(),
    })
}

#[allow(dead_code)]
pub fn state_with_db(db: DatabaseConnection) -> Arc<ServerState> {
    state_with(db, create_mock_cli())
}

#[allow(dead_code)]
pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

#[allow(dead_code)]
pub fn mock_user() -> user::Model {
    user::Model {
        id: Uuid::new_v4(),
        username: "testuser".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password: "not-a-real-hash".to_string(),
        last_login_at: *NULL_TIME,
        created_at: *NULL_TIME,
    }
}

#[allow(dead_code)]
pub fn bearer_token(id: Uuid) -> String {
    web::auth::encode_jwt(TEST_JWT_SECRET, id, 24).unwrap()
}
