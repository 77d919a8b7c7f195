use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReferralClientOverride::Table)
                    .if_not_exists()
                    .col(string(ReferralClientOverride::OverrideId).primary_key())
                    .col(string_uniq(ReferralClientOverride::UserId))
                    .col(double(ReferralClientOverride::BonusPercentage))
                    .col(timestamp_with_time_zone_null(
                        ReferralClientOverride::ExpiresAt,
                    ))
                    .col(text(ReferralClientOverride::Reason))
                    .col(boolean(ReferralClientOverride::IsActive).default(true))
                    .col(string_null(ReferralClientOverride::CreatedBy))
                    .col(
                        timestamp_with_time_zone(ReferralClientOverride::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ReferralClientOverride::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_referral_client_override_user_id")
                            .from(
                                ReferralClientOverride::Table,
                                ReferralClientOverride::UserId,
                            )
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ReferralClientOverride::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReferralClientOverride {
    #[sea_orm(iden = "referral_client_overrides")]
    Table,
    OverrideId,
    UserId,
    BonusPercentage,
    ExpiresAt,
    Reason,
    IsActive,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
