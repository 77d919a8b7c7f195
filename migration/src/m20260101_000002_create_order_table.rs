use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(string(Order::OrderId).primary_key())
                    .col(string(Order::UserId))
                    .col(string(Order::OrderType))
                    .col(string(Order::Status))
                    .col(double(Order::Amount).default(0.0))
                    .col(double_null(Order::TotalAmount))
                    .col(double_null(Order::PayoutAmount))
                    .col(double(Order::BonusAmount).default(0.0))
                    .col(double(Order::BonusConsumed).default(0.0))
                    .col(double(Order::VoidAmount).default(0.0))
                    .col(string_null(Order::GameName))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Order::ApprovedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user_id")
                    .table(Order::Table)
                    .col(Order::UserId)
                    .to_owned(),
            )
            .await?;

        // Reporting windows filter on type, status and approval time together
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_type_status_approved_at")
                    .table(Order::Table)
                    .col(Order::OrderType)
                    .col(Order::Status)
                    .col(Order::ApprovedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_orders_type_status_approved_at")
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_orders_user_id")
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    OrderId,
    UserId,
    OrderType,
    Status,
    Amount,
    TotalAmount,
    PayoutAmount,
    BonusAmount,
    BonusConsumed,
    VoidAmount,
    GameName,
    CreatedAt,
    ApprovedAt,
}
