pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_order_table;
mod m20260101_000003_create_referral_earning_table;
mod m20260101_000004_create_game_table;
mod m20260101_000005_create_system_settings_table;
mod m20260101_000006_create_referral_tier_table;
mod m20260101_000007_create_referral_global_override_table;
mod m20260101_000008_create_referral_client_override_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_order_table::Migration),
            Box::new(m20260101_000003_create_referral_earning_table::Migration),
            Box::new(m20260101_000004_create_game_table::Migration),
            Box::new(m20260101_000005_create_system_settings_table::Migration),
            Box::new(m20260101_000006_create_referral_tier_table::Migration),
            Box::new(m20260101_000007_create_referral_global_override_table::Migration),
            Box::new(m20260101_000008_create_referral_client_override_table::Migration),
        ]
    }
}
