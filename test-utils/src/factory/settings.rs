//! System settings factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the `global` settings row with the given cashout multipliers.
pub async fn create_settings(
    db: &DatabaseConnection,
    max_cashout_multiplier: f64,
    min_cashout_multiplier: f64,
) -> Result<entity::system_settings::Model, DbErr> {
    entity::system_settings::ActiveModel {
        id: ActiveValue::Set("global".to_string()),
        max_cashout_multiplier: ActiveValue::Set(max_cashout_multiplier),
        min_cashout_multiplier: ActiveValue::Set(min_cashout_multiplier),
    }
    .insert(db)
    .await
}
