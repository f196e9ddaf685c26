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
                    .table(LinkSet::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LinkSet::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(LinkSet::Owner)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(LinkSet::Github).string())
                    .col(ColumnDef::new(LinkSet::Linkedin).string())
                    .col(ColumnDef::new(LinkSet::Portfolio).string())
                    .col(ColumnDef::new(LinkSet::Twitter).string())
                    .col(ColumnDef::new(LinkSet::Website).string())
                    .col(ColumnDef::new(LinkSet::Other).json_binary().not_null())
                    .col(ColumnDef::new(LinkSet::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(LinkSet::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-link_set-owner")
                            .from(LinkSet::Table, LinkSet::Owner)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LinkSet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LinkSet {
    Table,
    Id,
    Owner,
    Github,
    Linkedin,
    Portfolio,
    Twitter,
    Website,
    Other,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
