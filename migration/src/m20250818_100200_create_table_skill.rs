/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Skill::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skill::Owner).uuid().not_null())
                    .col(ColumnDef::new(Skill::Name).string().not_null())
                    .col(ColumnDef::new(Skill::Proficiency).integer().not_null())
                    .col(ColumnDef::new(Skill::Category).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Skill::YearsOfExperience)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Skill::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Skill::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-skill-owner")
                            .from(Skill::Table, Skill::Owner)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-skill-owner-name")
                    .table(Skill::Table)
                    .col(Skill::Owner)
                    .col(Skill::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skill {
    Table,
    Id,
    Owner,
    Name,
    Proficiency,
    Category,
    YearsOfExperience,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
