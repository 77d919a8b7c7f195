use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReferralTier::Table)
                    .if_not_exists()
                    .col(string(ReferralTier::TierId).primary_key())
                    .col(string_uniq(ReferralTier::TierName))
                    .col(integer(ReferralTier::MinReferrals))
                    .col(integer_null(ReferralTier::MaxReferrals))
                    .col(double(ReferralTier::BonusPercentage))
                    .col(text_null(ReferralTier::Description))
                    .col(boolean(ReferralTier::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(ReferralTier::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ReferralTier::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReferralTier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReferralTier {
    #[sea_orm(iden = "referral_tiers")]
    Table,
    TierId,
    TierName,
    MinReferrals,
    MaxReferrals,
    BonusPercentage,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
