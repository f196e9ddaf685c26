/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum_test::TestServer;
use entity::link_set::{self, OtherLinkList};
use folio_core::consts::NULL_TIME;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use uuid::Uuid;
use web::create_router;

use common::*;

fn mock_links(owner: Uuid) -> link_set::Model {
    link_set::Model {
        id: Uuid::new_v4(),
        owner,
        github: Some("https://github.com/testuser".to_string()),
        linkedin: None,
        portfolio: None,
        twitter: None,
        website: None,
        other: OtherLinkList::default(),
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

#[tokio::test]
async fn test_post_links_rejects_bad_github_url() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .post("/api/links")
        .authorization_bearer(&token)
        .json(&json!({
            "github": "https://gitlab.com/testuser",
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Validation failed");

    let errors = body["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("Please enter a valid GitHub URL")));
}

#[tokio::test]
async fn test_post_links_rejects_other_without_label() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .post("/api/links")
        .authorization_bearer(&token)
        .json(&json!({
            "other": [{ "label": "", "url": "https://blog.example.com" }],
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("Link label is required")));
}

#[tokio::test]
async fn test_post_links_conflict() {
    let user = mock_user();
    let token = bearer_token(user.id);
    let existing = mock_links(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([vec![existing]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .post("/api/links")
        .authorization_bearer(&token)
        .json(&json!({
            "github": "https://github.com/testuser",
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Links already exist. Use PUT to update.");
}

#[tokio::test]
async fn test_get_links_not_found() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([Vec::<link_set::Model>::new()])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/links")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["message"], "Links not found");
}

#[tokio::test]
async fn test_get_links_found() {
    let user = mock_user();
    let token = bearer_token(user.id);
    let existing = mock_links(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([vec![existing]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/links")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["links"]["github"], "https://github.com/testuser");
}
