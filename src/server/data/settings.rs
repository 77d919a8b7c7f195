//! System settings data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::analytics::CashoutMultipliers;

/// Id of the single settings row.
pub const GLOBAL_SETTINGS_ID: &str = "global";

/// Repository providing read access to runtime-tunable settings.
pub struct SettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the configured cashout multipliers.
    ///
    /// # Returns
    /// - `Ok(CashoutMultipliers)` - Stored values, or the 3x/1x defaults when no
    ///   settings row exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_cashout_multipliers(&self) -> Result<CashoutMultipliers, DbErr> {
        let entity = entity::prelude::SystemSettings::find_by_id(GLOBAL_SETTINGS_ID.to_string())
            .one(self.db)
            .await?;

        Ok(entity
            .map(CashoutMultipliers::from_entity)
            .unwrap_or_default())
    }
}
