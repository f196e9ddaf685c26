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
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profile::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Profile::Owner)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profile::Name).string().not_null())
                    .col(ColumnDef::new(Profile::Email).string().not_null())
                    .col(ColumnDef::new(Profile::Bio).text())
                    .col(ColumnDef::new(Profile::Location).string())
                    .col(ColumnDef::new(Profile::Phone).string())
                    .col(ColumnDef::new(Profile::Website).string())
                    .col(ColumnDef::new(Profile::Education).json_binary().not_null())
                    .col(ColumnDef::new(Profile::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Profile::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-profile-owner")
                            .from(Profile::Table, Profile::Owner)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Owner,
    Name,
    Email,
    Bio,
    Location,
    Phone,
    Website,
    Education,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
