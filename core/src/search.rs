/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Matching predicates for the cross-collection search aggregator.
//!
//! Matching is case-insensitive literal substring over the fields of each
//! record kind. The query is matched as-is; it is never compiled into a
//! pattern, so characters that are special in regex or LIKE syntax have no
//! effect here.

use entity::profile::Education;
use sea_orm::ActiveEnum;

use super::types::*;

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn opt_contains_ci(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|v| contains_ci(v, needle))
}

pub fn any_tag_matches(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| contains_ci(tag, needle))
}

fn education_matches(education: &Education, query: &str) -> bool {
    contains_ci(&education.institution, query)
        || contains_ci(&education.degree, query)
        || opt_contains_ci(education.field.as_deref(), query)
}

pub fn profile_matches(profile: &MProfile, query: &str) -> bool {
    contains_ci(&profile.name, query)
        || opt_contains_ci(profile.bio.as_deref(), query)
        || opt_contains_ci(profile.location.as_deref(), query)
        || profile
            .education
            .0
            .iter()
            .any(|entry| education_matches(entry, query))
}

pub fn skill_matches(skill: &MSkill, query: &str) -> bool {
    contains_ci(&skill.name, query) || contains_ci(&skill.category.to_value(), query)
}

pub fn project_matches(project: &MProject, query: &str) -> bool {
    contains_ci(&project.title, query)
        || contains_ci(&project.description, query)
        || contains_ci(&project.status.to_value(), query)
        || any_tag_matches(&project.skills, query)
}

pub fn work_matches(work: &MWorkExperience, query: &str) -> bool {
    contains_ci(&work.company, query)
        || contains_ci(&work.position, query)
        || opt_contains_ci(work.description.as_deref(), query)
        || opt_contains_ci(work.location.as_deref(), query)
        || contains_ci(&work.employment_type.to_value(), query)
        || any_tag_matches(&work.skills, query)
}
