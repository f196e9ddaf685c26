/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the search aggregator's matching predicates

use chrono::NaiveDate;
use entity::link_set;
use entity::profile::{Education, EducationList};
use entity::project::{ProjectLinkList, ProjectStatus};
use entity::skill::SkillCategory;
use entity::work_experience::EmploymentType;
use folio_core::consts::NULL_TIME;
use folio_core::search::*;
use folio_core::types::*;
use uuid::Uuid;

fn mock_profile() -> MProfile {
    MProfile {
        id: Uuid::new_v4(),
        owner: Uuid::new_v4(),
        name: "Alice Doe".to_string(),
        email: "alice@example.com".to_string(),
        bio: Some("Backend engineer who enjoys distributed systems".to_string()),
        location: Some("Berlin".to_string()),
        phone: None,
        website: None,
        education: EducationList(vec![Education {
            institution: "Technical University".to_string(),
            degree: "BSc".to_string(),
            field: Some("Computer Science".to_string()),
            start_date: NaiveDate::from_ymd_opt(2015, 10, 1),
            end_date: NaiveDate::from_ymd_opt(2018, 9, 30),
            current: false,
        }]),
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

fn mock_skill() -> MSkill {
    MSkill {
        id: Uuid::new_v4(),
        owner: Uuid::new_v4(),
        name: "Go".to_string(),
        proficiency: 9,
        category: SkillCategory::Programming,
        years_of_experience: 2,
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

fn mock_project() -> MProject {
    MProject {
        id: Uuid::new_v4(),
        owner: Uuid::new_v4(),
        title: "Orbit".to_string(),
        description: "A telemetry dashboard".to_string(),
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        links: ProjectLinkList::default(),
        status: ProjectStatus::InProgress,
        start_date: None,
        end_date: None,
        featured: false,
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

fn mock_work() -> MWorkExperience {
    MWorkExperience {
        id: Uuid::new_v4(),
        owner: Uuid::new_v4(),
        company: "Acme Corp".to_string(),
        position: "Software Engineer".to_string(),
        description: Some("Built the billing pipeline".to_string()),
        start_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
        end_date: None,
        current: true,
        location: Some("Remote".to_string()),
        employment_type: EmploymentType::FullTime,
        skills: vec!["Go".to_string(), "Kafka".to_string()],
        created_at: *NULL_TIME,
        updated_at: *NULL_TIME,
    }
}

#[test]
fn test_contains_ci() {
    assert!(contains_ci("Hello World", "world"));
    assert!(contains_ci("Hello World", "LO WO"));
    assert!(!contains_ci("Hello World", "mars"));

    // pattern metacharacters are matched literally
    assert!(!contains_ci("Hello World", ".*"));
    assert!(contains_ci("50% done", "50%"));
}

#[test]
fn test_profile_matches() {
    let profile = mock_profile();

    assert!(profile_matches(&profile, "alice"));
    assert!(profile_matches(&profile, "distributed"));
    assert!(profile_matches(&profile, "berlin"));
    // email is not a search field
    assert!(!profile_matches(&profile, "example.com"));
}

#[test]
fn test_profile_matches_education() {
    let profile = mock_profile();

    assert!(profile_matches(&profile, "technical university"));
    assert!(profile_matches(&profile, "bsc"));
    assert!(profile_matches(&profile, "computer"));
    assert!(!profile_matches(&profile, "philosophy"));
}

#[test]
fn test_skill_matches() {
    let skill = mock_skill();

    assert!(skill_matches(&skill, "go"));
    assert!(skill_matches(&skill, "GO"));
    assert!(skill_matches(&skill, "programming"));
    assert!(!skill_matches(&skill, "rust"));
}

#[test]
fn test_project_matches() {
    let project = mock_project();

    assert!(project_matches(&project, "orbit"));
    assert!(project_matches(&project, "telemetry"));
    // status string value
    assert!(project_matches(&project, "progress"));
    // tag membership, case-insensitive
    assert!(project_matches(&project, "rust"));
    assert!(project_matches(&project, "postgres"));
    assert!(!project_matches(&project, "python"));
}

#[test]
fn test_work_matches() {
    let work = mock_work();

    assert!(work_matches(&work, "acme"));
    assert!(work_matches(&work, "engineer"));
    assert!(work_matches(&work, "billing"));
    assert!(work_matches(&work, "remote"));
    // employment kind string value
    assert!(work_matches(&work, "full-time"));
    assert!(work_matches(&work, "kafka"));
    assert!(!work_matches(&work, "microsoft"));
}

#[test]
fn test_any_tag_matches() {
    let tags = vec!["Rust".to_string(), "WebAssembly".to_string()];

    assert!(any_tag_matches(&tags, "rust"));
    assert!(any_tag_matches(&tags, "assembly"));
    assert!(!any_tag_matches(&tags, "java"));
    assert!(!any_tag_matches(&[], "rust"));
}

#[test]
fn test_link_set_default_other_is_empty() {
    let other = link_set::OtherLinkList::default();
    assert!(other.0.is_empty());
}
