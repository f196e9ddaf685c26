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
                    .table(WorkExperience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperience::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkExperience::Owner).uuid().not_null())
                    .col(ColumnDef::new(WorkExperience::Company).string().not_null())
                    .col(ColumnDef::new(WorkExperience::Position).string().not_null())
                    .col(ColumnDef::new(WorkExperience::Description).text())
                    .col(
                        ColumnDef::new(WorkExperience::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperience::EndDate).date())
                    .col(ColumnDef::new(WorkExperience::Current).boolean().not_null())
                    .col(ColumnDef::new(WorkExperience::Location).string())
                    .col(
                        ColumnDef::new(WorkExperience::EmploymentType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::Skills)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperience::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-work_experience-owner")
                            .from(WorkExperience::Table, WorkExperience::Owner)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkExperience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkExperience {
    Table,
    Id,
    Owner,
    Company,
    Position,
    Description,
    StartDate,
    EndDate,
    Current,
    Location,
    EmploymentType,
    Skills,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
