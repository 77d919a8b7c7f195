use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReferralGlobalOverride::Table)
                    .if_not_exists()
                    .col(string(ReferralGlobalOverride::OverrideId).primary_key())
                    .col(string(ReferralGlobalOverride::Name))
                    .col(double(ReferralGlobalOverride::BonusPercentage))
                    .col(timestamp_with_time_zone(ReferralGlobalOverride::StartDate))
                    .col(timestamp_with_time_zone(ReferralGlobalOverride::EndDate))
                    .col(text_null(ReferralGlobalOverride::Description))
                    .col(boolean(ReferralGlobalOverride::IsActive).default(true))
                    .col(string_null(ReferralGlobalOverride::CreatedBy))
                    .col(
                        timestamp_with_time_zone(ReferralGlobalOverride::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ReferralGlobalOverride::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ReferralGlobalOverride::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReferralGlobalOverride {
    #[sea_orm(iden = "referral_global_overrides")]
    Table,
    OverrideId,
    Name,
    BonusPercentage,
    StartDate,
    EndDate,
    Description,
    IsActive,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
