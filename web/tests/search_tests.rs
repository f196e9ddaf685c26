/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum_test::TestServer;
use entity::profile::{self, EducationList};
use entity::project::{self, ProjectLinkList, ProjectStatus};
use entity::skill::{self, SkillCategory};
use entity::work_experience::{self, EmploymentType};
use chrono::NaiveDate;
use folio_core::consts::NULL_TIME;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::Value;
use uuid::Uuid;
use web::create_router;

use common::*;

fn mock_profile(owner: Uuid, bio: &str) -> profile::Model {
    profile::Model {
        id: Uuid::new_v4(),
        owner,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        bio: Some(bio.to_string()),
        location: None,
        phone: None,
        website: None,
        education: EducationList::default(),
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

fn mock_skill(owner: Uuid, name: &str) -> skill::Model {
    skill::Model {
        id: Uuid::new_v4(),
        owner,
        name: name.to_string(),
        proficiency: 8,
        category: SkillCategory::Programming,
        years_of_experience: 3,
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

fn mock_project(owner: Uuid, title: &str, tags: Vec<String>) -> project::Model {
    project::Model {
        id: Uuid::new_v4(),
        owner,
        title: title.to_string(),
        description: "A side project".to_string(),
        skills: tags,
        links: ProjectLinkList::default(),
        status: ProjectStatus::Completed,
        start_date: None,
        end_date: None,
        featured: false,
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

fn mock_work(owner: Uuid, company: &str) -> work_experience::Model {
    work_experience::Model {
        id: Uuid::new_v4(),
        owner,
        company: company.to_string(),
        position: "Engineer".to_string(),
        description: None,
        start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        end_date: None,
        current: true,
        location: None,
        employment_type: EmploymentType::FullTime,
        skills: vec!["Kubernetes".to_string()],
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

#[tokio::test]
async fn test_search_requires_query() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/search")
        .authorization_bearer(&token)
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Search query is required");
}

#[tokio::test]
async fn test_search_rejects_whitespace_query() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/search")
        .add_query_param("q", "   ")
        .authorization_bearer(&token)
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Search query is required");
}

#[tokio::test]
async fn test_search_aggregates_all_collections() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let profiles = vec![mock_profile(user.id, "Rust developer")];
    let skills = vec![mock_skill(user.id, "Rust"), mock_skill(user.id, "Go")];
    let projects = vec![
        mock_project(user.id, "Orbit", vec!["Rust".to_string()]),
        mock_project(user.id, "Dashboard", vec!["React".to_string()]),
    ];
    let work = vec![mock_work(user.id, "Acme Corp")];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .append_query_results([profiles])
        .append_query_results([skills])
        .append_query_results([projects])
        .append_query_results([work])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/search")
        .add_query_param("q", "rust")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["query"], "rust");

    let results = &body["results"];
    assert_eq!(results["profiles"].as_array().unwrap().len(), 1);
    assert_eq!(results["skills"].as_array().unwrap().len(), 1);
    assert_eq!(results["skills"][0]["name"], "Rust");
    assert_eq!(results["projects"].as_array().unwrap().len(), 1);
    assert_eq!(results["projects"][0]["title"], "Orbit");
    assert_eq!(results["workExperiences"].as_array().unwrap().len(), 0);
    assert_eq!(results["totalResults"], 3);
}

#[tokio::test]
async fn test_search_no_matches() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user.clone()]])
        .append_query_results([vec![mock_profile(user.id, "Backend engineer")]])
        .append_query_results([vec![mock_skill(user.id, "Go")]])
        .append_query_results([Vec::<project::Model>::new()])
        .append_query_results([Vec::<work_experience::Model>::new()])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/search")
        .add_query_param("q", "haskell")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["results"]["totalResults"], 0);
    assert_eq!(body["results"]["profiles"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_search_matching_trims_query_but_echoes_raw() {
    let user = mock_user();
    let token = bearer_token(user.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user.clone()]])
        .append_query_results([Vec::<profile::Model>::new()])
        .append_query_results([vec![mock_skill(user.id, "Rust")]])
        .append_query_results([Vec::<project::Model>::new()])
        .append_query_results([Vec::<work_experience::Model>::new()])
        .into_connection();
    let server = TestServer::new(create_router(state_with_db(db))).unwrap();

    let response = server
        .get("/api/search")
        .add_query_param("q", "  rust  ")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["query"], "  rust  ");
    assert_eq!(body["results"]["totalResults"], 1);
}
