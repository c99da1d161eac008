use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create proposals table
        manager
            .create_table(
                Table::create()
                    .table(Proposals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Proposals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Proposals::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Proposals::DealId).uuid())
                    .col(
                        ColumnDef::new(Proposals::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(Proposals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Proposals::SentAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Proposals::SignedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create proposal_views table
        manager
            .create_table(
                Table::create()
                    .table(ProposalViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProposalViews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProposalViews::ProposalId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProposalViews::DurationSeconds)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProposalViews::ViewedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposal_views_proposal")
                    .table(ProposalViews::Table)
                    .col(ProposalViews::ProposalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposals_team_status")
                    .table(Proposals::Table)
                    .col(Proposals::TeamId)
                    .col(Proposals::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProposalViews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Proposals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Proposals {
    Table,
    Id,
    TeamId,
    DealId,
    Status,
    CreatedAt,
    SentAt,
    SignedAt,
}

#[derive(DeriveIden)]
enum ProposalViews {
    Table,
    Id,
    ProposalId,
    DurationSeconds,
    ViewedAt,
}
