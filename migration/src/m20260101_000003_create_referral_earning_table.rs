use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReferralEarning::Table)
                    .if_not_exists()
                    .col(string(ReferralEarning::EarningId).primary_key())
                    .col(string(ReferralEarning::ReferrerUserId))
                    .col(string(ReferralEarning::RefereeUserId))
                    .col(double(ReferralEarning::Amount).default(0.0))
                    .col(string(ReferralEarning::Status))
                    .col(
                        timestamp_with_time_zone(ReferralEarning::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_referral_earnings_created_at")
                    .table(ReferralEarning::Table)
                    .col(ReferralEarning::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_referral_earnings_created_at")
                    .table(ReferralEarning::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReferralEarning::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReferralEarning {
    #[sea_orm(iden = "referral_earnings")]
    Table,
    EarningId,
    ReferrerUserId,
    RefereeUserId,
    Amount,
    Status,
    CreatedAt,
}
