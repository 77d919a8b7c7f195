use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemSettings::Table)
                    .if_not_exists()
                    .col(string(SystemSettings::Id).primary_key())
                    .col(double(SystemSettings::MaxCashoutMultiplier).default(3.0))
                    .col(double(SystemSettings::MinCashoutMultiplier).default(1.0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SystemSettings {
    Table,
    Id,
    MaxCashoutMultiplier,
    MinCashoutMultiplier,
}
