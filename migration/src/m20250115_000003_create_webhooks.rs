use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create webhooks table
        manager
            .create_table(
                Table::create()
                    .table(Webhooks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Webhooks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Webhooks::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Webhooks::Url).string().not_null())
                    .col(ColumnDef::new(Webhooks::SecretKey).string().not_null())
                    .col(ColumnDef::new(Webhooks::Events).json().not_null())
                    .col(
                        ColumnDef::new(Webhooks::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Webhooks::LastTriggeredAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Webhooks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Webhooks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create webhook_logs table (append-only, one row per delivery attempt)
        manager
            .create_table(
                Table::create()
                    .table(WebhookLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebhookLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WebhookLogs::WebhookId).uuid().not_null())
                    .col(ColumnDef::new(WebhookLogs::TeamId).uuid().not_null())
                    .col(ColumnDef::new(WebhookLogs::EventType).string().not_null())
                    .col(ColumnDef::new(WebhookLogs::Payload).json().not_null())
                    .col(ColumnDef::new(WebhookLogs::ResponseStatus).small_integer())
                    .col(ColumnDef::new(WebhookLogs::ResponseBody).text())
                    .col(
                        ColumnDef::new(WebhookLogs::Success)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WebhookLogs::DurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(WebhookLogs::ErrorMessage).text())
                    .col(
                        ColumnDef::new(WebhookLogs::CreatedAt)
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
                    .name("idx_webhooks_team")
                    .table(Webhooks::Table)
                    .col(Webhooks::TeamId)
                    .to_owned(),
            )
            .await?;

        // Success/failure counts are derived from this table on read
        manager
            .create_index(
                Index::create()
                    .name("idx_webhook_logs_webhook_success")
                    .table(WebhookLogs::Table)
                    .col(WebhookLogs::WebhookId)
                    .col(WebhookLogs::Success)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebhookLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Webhooks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Webhooks {
    Table,
    Id,
    TeamId,
    Url,
    SecretKey,
    Events,
    Active,
    LastTriggeredAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WebhookLogs {
    Table,
    Id,
    WebhookId,
    TeamId,
    EventType,
    Payload,
    ResponseStatus,
    ResponseBody,
    Success,
    DurationMs,
    ErrorMessage,
    CreatedAt,
}
