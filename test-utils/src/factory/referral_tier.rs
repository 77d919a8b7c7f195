//! Referral tier factory.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating tier bands with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tier = TierFactory::new(&db)
///     .bounds(0, None)
///     .bonus_percentage(12.5)
///     .build()
///     .await?;
/// ```
pub struct TierFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::referral_tier::Model,
}

impl<'a> TierFactory<'a> {
    /// Creates a new TierFactory.
    ///
    /// Defaults: unique id and name, band `0..=None`, 10%, active.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            entity: entity::referral_tier::Model {
                tier_id: format!("TIER_{}", id),
                tier_name: format!("Tier {}", id),
                min_referrals: 0,
                max_referrals: None,
                bonus_percentage: 10.0,
                description: None,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn tier_id(mut self, tier_id: impl Into<String>) -> Self {
        self.entity.tier_id = tier_id.into();
        self
    }

    pub fn tier_name(mut self, tier_name: impl Into<String>) -> Self {
        self.entity.tier_name = tier_name.into();
        self
    }

    /// Sets inclusive lower and upper bounds, `None` meaning unbounded.
    pub fn bounds(mut self, min: i32, max: Option<i32>) -> Self {
        self.entity.min_referrals = min;
        self.entity.max_referrals = max;
        self
    }

    pub fn bonus_percentage(mut self, pct: f64) -> Self {
        self.entity.bonus_percentage = pct;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    /// Builds and inserts the tier.
    pub async fn build(self) -> Result<entity::referral_tier::Model, DbErr> {
        insert(self.db, self.entity).await
    }
}

async fn insert(
    db: &DatabaseConnection,
    e: entity::referral_tier::Model,
) -> Result<entity::referral_tier::Model, DbErr> {
    entity::referral_tier::ActiveModel {
        tier_id: ActiveValue::Set(e.tier_id),
        tier_name: ActiveValue::Set(e.tier_name),
        min_referrals: ActiveValue::Set(e.min_referrals),
        max_referrals: ActiveValue::Set(e.max_referrals),
        bonus_percentage: ActiveValue::Set(e.bonus_percentage),
        description: ActiveValue::Set(e.description),
        is_active: ActiveValue::Set(e.is_active),
        created_at: ActiveValue::Set(e.created_at),
        updated_at: ActiveValue::Set(e.updated_at),
    }
    .insert(db)
    .await
}

/// Creates a tier covering `min..=max` at the given percentage.
pub async fn create_tier(
    db: &DatabaseConnection,
    min: i32,
    max: Option<i32>,
    pct: f64,
) -> Result<entity::referral_tier::Model, DbErr> {
    TierFactory::new(db)
        .bounds(min, max)
        .bonus_percentage(pct)
        .build()
        .await
}

/// Inserts the five default bands (Starter through Ruby).
///
/// # Returns
/// - `Ok(Vec<entity::referral_tier::Model>)` - Inserted tiers ordered by `min_referrals`
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_default_tiers(
    db: &DatabaseConnection,
) -> Result<Vec<entity::referral_tier::Model>, DbErr> {
    let mut tiers = Vec::new();
    for tier in fixture::referral_tier::default_tiers() {
        tiers.push(insert(db, tier).await?);
    }
    Ok(tiers)
}
