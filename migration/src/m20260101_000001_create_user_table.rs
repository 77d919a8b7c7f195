use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::UserId).primary_key())
                    .col(string_uniq(User::Username))
                    .col(string_null(User::DisplayName))
                    .col(string(User::Role).default("user"))
                    .col(boolean(User::IsActive).default(true))
                    .col(string_null(User::ReferredByUserId))
                    .col(double(User::CashBalance).default(0.0))
                    .col(double(User::BonusBalance).default(0.0))
                    .col(double(User::PlayCredits).default(0.0))
                    .col(double(User::TotalDeposited).default(0.0))
                    .col(double(User::TotalWithdrawn).default(0.0))
                    .col(boolean(User::WithdrawLocked).default(false))
                    .col(boolean(User::IsSuspicious).default(false))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Referral counts are derived from this column on every lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_users_referred_by_user_id")
                    .table(User::Table)
                    .col(User::ReferredByUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_users_referred_by_user_id")
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    UserId,
    Username,
    DisplayName,
    Role,
    IsActive,
    ReferredByUserId,
    CashBalance,
    BonusBalance,
    PlayCredits,
    TotalDeposited,
    TotalWithdrawn,
    WithdrawLocked,
    IsSuspicious,
    CreatedAt,
}
