/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum_test::TestServer;
use entity::project::{self, ProjectLinkList, ProjectStatus};
use folio_core::consts::NULL_TIME;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use uuid::Uuid;
use web::create_router;

use common::*;

fn mock_project(owner: Uuid, title: &str, tags: Vec<String>, featured: bool) -> project::Model {
    project::Model {
        id: Uuid::new_v4(),
        owner,
        title: title.to_string(),
        description: "A side project".to_string(),
        skills: tags,
        links: ProjectLinkList::default(),
        status: ProjectStatus::InProgress,
        start_date: None,
        end_date: None,
        featured,
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

#[tokio::test]
async fn test_post_project_validation_errors() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .post("/api/projects")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "",
            "description": "",
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Validation failed");

    let errors = body["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("Project title is required")));
    assert!(errors.contains(&json!("Project description is required")));
}

#[tokio::test]
async fn test_post_project_rejects_bad_link_url() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .post("/api/projects")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Orbit",
            "description": "A telemetry dashboard",
            "links": [{ "type": "demo", "url": "not-a-url" }],
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("Please enter a valid URL")));
}

#[tokio::test]
async fn test_get_projects_with_skill_filter() {
    let user = mock_user();
    let token = bearer_token(user.id);
    let projects = vec![
        mock_project(user.id, "Orbit", vec!["Rust".to_string()], true),
        mock_project(user.id, "Dashboard", vec!["React".to_string()], false),
    ];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([projects])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/projects")
        .add_query_param("skill", "rust")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let projects = body["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Orbit");
}

#[tokio::test]
async fn test_get_project_not_found() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([Vec::<project::Model>::new()])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get(&format!("/api/projects/{}", Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["message"], "Project not found");
}

#[tokio::test]
async fn test_get_project_wire_format() {
    let user = mock_user();
    let token = bearer_token(user.id);
    let project = mock_project(user.id, "Orbit", vec!["Rust".to_string()], true);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([vec![project]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get(&format!("/api/projects/{}", Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["project"]["status"], "in-progress");
    assert_eq!(body["project"]["featured"], true);
}
