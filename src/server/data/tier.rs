//! Referral tier data repository.
//!
//! Provides the `TierRepository` for the tier table: admin listing and updates, the
//! band lookup used by bonus resolution and default seeding at startup.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tier::{Tier, UpdateTierParams, DEFAULT_TIERS};

/// Repository providing database operations for referral tiers.
pub struct TierRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TierRepository<'a> {
    /// Creates a new TierRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TierRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tier, active or not, ordered by `min_referrals` ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<Tier>)` - All tiers (empty if none are configured)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Tier>, DbErr> {
        let entities = entity::prelude::ReferralTier::find()
            .order_by_asc(entity::referral_tier::Column::MinReferrals)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tier::from_entity).collect())
    }

    /// Gets active tiers ordered by `min_referrals` ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<Tier>)` - Active tiers
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_ascending(&self) -> Result<Vec<Tier>, DbErr> {
        let entities = entity::prelude::ReferralTier::find()
            .filter(entity::referral_tier::Column::IsActive.eq(true))
            .order_by_asc(entity::referral_tier::Column::MinReferrals)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tier::from_entity).collect())
    }

    /// Finds the active band containing `referral_count`.
    ///
    /// When bands overlap the one with the greatest `min_referrals` wins, so a
    /// misconfigured table still resolves deterministically.
    ///
    /// # Arguments
    /// - `referral_count` - Live referral count of the user
    ///
    /// # Returns
    /// - `Ok(Some(Tier))` - Matching band
    /// - `Ok(None)` - No band covers the count
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_count(&self, referral_count: u64) -> Result<Option<Tier>, DbErr> {
        let count = referral_count as i64;

        let entity = entity::prelude::ReferralTier::find()
            .filter(entity::referral_tier::Column::IsActive.eq(true))
            .filter(entity::referral_tier::Column::MinReferrals.lte(count))
            .filter(
                Condition::any()
                    .add(entity::referral_tier::Column::MaxReferrals.is_null())
                    .add(entity::referral_tier::Column::MaxReferrals.gte(count)),
            )
            .order_by_desc(entity::referral_tier::Column::MinReferrals)
            .one(self.db)
            .await?;

        Ok(entity.map(Tier::from_entity))
    }

    pub async fn find_by_id(&self, tier_id: &str) -> Result<Option<Tier>, DbErr> {
        let entity = entity::prelude::ReferralTier::find_by_id(tier_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Tier::from_entity))
    }

    /// Replaces every mutable field of a tier and bumps `updated_at`.
    ///
    /// # Arguments
    /// - `params` - New values, keyed by `tier_id`
    /// - `at` - Update timestamp
    ///
    /// # Returns
    /// - `Ok(Some(Tier))` - Updated tier
    /// - `Ok(None)` - No tier with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateTierParams,
        at: DateTime<Utc>,
    ) -> Result<Option<Tier>, DbErr> {
        let Some(existing) = entity::prelude::ReferralTier::find_by_id(params.tier_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.tier_name = ActiveValue::Set(params.tier_name);
        active.min_referrals = ActiveValue::Set(params.min_referrals);
        active.max_referrals = ActiveValue::Set(params.max_referrals);
        active.bonus_percentage = ActiveValue::Set(params.bonus_percentage);
        active.description = ActiveValue::Set(params.description);
        active.is_active = ActiveValue::Set(params.is_active);
        active.updated_at = ActiveValue::Set(at);

        let entity = active.update(self.db).await?;

        Ok(Some(Tier::from_entity(entity)))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ReferralTier::find().count(self.db).await
    }

    /// Inserts the five default bands.
    ///
    /// # Arguments
    /// - `at` - Creation timestamp for every row
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of tiers inserted
    /// - `Err(DbErr)` - Database error, including a conflict with existing tiers
    pub async fn insert_defaults(&self, at: DateTime<Utc>) -> Result<usize, DbErr> {
        let models = DEFAULT_TIERS
            .iter()
            .map(|tier| entity::referral_tier::ActiveModel {
                tier_id: ActiveValue::Set(tier.tier_id.to_string()),
                tier_name: ActiveValue::Set(tier.tier_name.to_string()),
                min_referrals: ActiveValue::Set(tier.min_referrals),
                max_referrals: ActiveValue::Set(tier.max_referrals),
                bonus_percentage: ActiveValue::Set(tier.bonus_percentage),
                description: ActiveValue::Set(Some(tier.description.to_string())),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(at),
                updated_at: ActiveValue::Set(at),
            })
            .collect::<Vec<_>>();

        let inserted = models.len();

        entity::prelude::ReferralTier::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(inserted)
    }
}
