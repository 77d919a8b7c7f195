use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::tier::TierRepository,
    error::{referral::ReferralError, AppError},
    model::tier::{Tier, UpdateTierParams},
};

pub struct TierService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TierService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tier ordered by `min_referrals` ascending
    pub async fn list(&self) -> Result<Vec<Tier>, AppError> {
        Ok(TierRepository::new(self.db).get_all().await?)
    }

    /// Validates and applies a tier update
    ///
    /// Band coverage and overlap against the other tiers is not checked.
    pub async fn update(
        &self,
        params: UpdateTierParams,
        at: DateTime<Utc>,
    ) -> Result<Tier, AppError> {
        params.validate()?;

        let tier_id = params.tier_id.clone();

        TierRepository::new(self.db)
            .update(params, at)
            .await?
            .ok_or_else(|| ReferralError::TierNotFound(tier_id).into())
    }

    /// Inserts the default bands if the tier table is empty
    ///
    /// Returns the number of tiers inserted, zero when tiers already exist.
    pub async fn seed_defaults(&self) -> Result<usize, AppError> {
        let repo = TierRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(0);
        }

        Ok(repo.insert_defaults(Utc::now()).await?)
    }
}
