//! Global campaign override data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::global_override::{GlobalOverride, GlobalOverrideParams};

/// Repository providing database operations for global campaign overrides.
pub struct GlobalOverrideRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GlobalOverrideRepository<'a> {
    /// Creates a new GlobalOverrideRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GlobalOverrideRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every campaign ordered by `start_date` descending.
    ///
    /// # Returns
    /// - `Ok(Vec<GlobalOverride>)` - All campaigns including expired and inactive ones
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<GlobalOverride>, DbErr> {
        let entities = entity::prelude::ReferralGlobalOverride::find()
            .order_by_desc(entity::referral_global_override::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(GlobalOverride::from_entity)
            .collect())
    }

    /// Finds the campaign that applies at `at`.
    ///
    /// Among active campaigns whose inclusive window contains `at`, picks the highest
    /// percentage. Ties go to the most recently created, then the greatest id.
    ///
    /// # Arguments
    /// - `at` - Instant to evaluate campaign windows against
    ///
    /// # Returns
    /// - `Ok(Some(GlobalOverride))` - Winning campaign
    /// - `Ok(None)` - No campaign is running at `at`
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(&self, at: DateTime<Utc>) -> Result<Option<GlobalOverride>, DbErr> {
        let entity = entity::prelude::ReferralGlobalOverride::find()
            .filter(entity::referral_global_override::Column::IsActive.eq(true))
            .filter(entity::referral_global_override::Column::StartDate.lte(at))
            .filter(entity::referral_global_override::Column::EndDate.gte(at))
            .order_by_desc(entity::referral_global_override::Column::BonusPercentage)
            .order_by_desc(entity::referral_global_override::Column::CreatedAt)
            .order_by_desc(entity::referral_global_override::Column::OverrideId)
            .one(self.db)
            .await?;

        Ok(entity.map(GlobalOverride::from_entity))
    }

    pub async fn find_by_id(&self, override_id: &str) -> Result<Option<GlobalOverride>, DbErr> {
        let entity = entity::prelude::ReferralGlobalOverride::find_by_id(override_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(GlobalOverride::from_entity))
    }

    /// Creates a campaign with a new UUID.
    ///
    /// # Arguments
    /// - `params` - Validated campaign values
    /// - `created_by` - Admin user id creating the campaign
    /// - `at` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(GlobalOverride)` - Created campaign
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: GlobalOverrideParams,
        created_by: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<GlobalOverride, DbErr> {
        let entity = entity::referral_global_override::ActiveModel {
            override_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name),
            bonus_percentage: ActiveValue::Set(params.bonus_percentage),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(params.is_active),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(at),
            updated_at: ActiveValue::Set(at),
        }
        .insert(self.db)
        .await?;

        Ok(GlobalOverride::from_entity(entity))
    }

    /// Replaces a campaign's values and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(GlobalOverride))` - Updated campaign
    /// - `Ok(None)` - No campaign with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        override_id: &str,
        params: GlobalOverrideParams,
        at: DateTime<Utc>,
    ) -> Result<Option<GlobalOverride>, DbErr> {
        let Some(existing) =
            entity::prelude::ReferralGlobalOverride::find_by_id(override_id.to_string())
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.bonus_percentage = ActiveValue::Set(params.bonus_percentage);
        active.start_date = ActiveValue::Set(params.start_date);
        active.end_date = ActiveValue::Set(params.end_date);
        active.description = ActiveValue::Set(params.description);
        active.is_active = ActiveValue::Set(params.is_active);
        active.updated_at = ActiveValue::Set(at);

        let entity = active.update(self.db).await?;

        Ok(Some(GlobalOverride::from_entity(entity)))
    }

    /// Deletes a campaign.
    ///
    /// # Returns
    /// - `Ok(true)` - Campaign deleted
    /// - `Ok(false)` - No campaign with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, override_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ReferralGlobalOverride::delete_by_id(override_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
