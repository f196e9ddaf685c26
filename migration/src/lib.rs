/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250818_100000_create_table_user;
mod m20250818_100100_create_table_profile;
mod m20250818_100200_create_table_skill;
mod m20250818_100300_create_table_project;
mod m20250818_100400_create_table_work_experience;
mod m20250818_100500_create_table_link_set;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250818_100000_create_table_user::Migration),
            Box::new(m20250818_100100_create_table_profile::Migration),
            Box::new(m20250818_100200_create_table_skill::Migration),
            Box::new(m20250818_100300_create_table_project::Migration),
            Box::new(m20250818_100400_create_table_work_experience::Migration),
            Box::new(m20250818_100500_create_table_link_set::Migration),
        ]
    }
}
