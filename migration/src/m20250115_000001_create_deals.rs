use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create deals table
        manager
            .create_table(
                Table::create()
                    .table(Deals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Deals::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Deals::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Deals::Title).string().not_null())
                    .col(
                        ColumnDef::new(Deals::Stage)
                            .string()
                            .not_null()
                            .default("lead"),
                    )
                    .col(ColumnDef::new(Deals::Value).big_integer())
                    .col(ColumnDef::new(Deals::ContactId).uuid())
                    .col(ColumnDef::new(Deals::OwnerId).uuid())
                    .col(
                        ColumnDef::new(Deals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Deals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Stage lookups are always team-scoped
        manager
            .create_index(
                Index::create()
                    .name("idx_deals_team_stage")
                    .table(Deals::Table)
                    .col(Deals::TeamId)
                    .col(Deals::Stage)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Deals {
    Table,
    Id,
    TeamId,
    Title,
    Stage,
    Value,
    ContactId,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}
