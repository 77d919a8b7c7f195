//! Effective bonus resolution.
//!
//! Resolution is a pure read of stored tiers, overrides and accounts at an injected
//! instant. Sources are tried in precedence order and the first match wins:
//!
//! 1. Active, unexpired individual client override
//! 2. Running global campaign (highest percentage)
//! 3. Tier band containing the live referral count
//! 4. The 10% default when no band matches
//!
//! Lower-precedence sources are not queried once a higher one matches. The referral
//! count is always computed for display.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        client_override::ClientOverrideRepository, global_override::GlobalOverrideRepository,
        tier::TierRepository, user::UserRepository,
    },
    error::{referral::ReferralError, AppError},
    model::{
        bonus::{EffectiveBonus, Provenance, ReferralStats, TierProgress},
        tier::TierPosition,
    },
};

pub struct BonusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BonusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the single bonus percentage in effect for a user at `at`.
    ///
    /// # Arguments
    /// - `user_id` - User to resolve for
    /// - `at` - Instant override validity is evaluated against
    ///
    /// # Returns
    /// - `Ok(EffectiveBonus)` - Percentage, source and provenance
    /// - `Err(ReferralError::UserNotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Storage failure, no partial result
    pub async fn resolve_effective_bonus(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<EffectiveBonus, AppError> {
        self.require_user(user_id).await?;

        let referral_count = UserRepository::new(self.db)
            .count_referrals(user_id)
            .await?;

        self.resolve(user_id, referral_count, at).await
    }

    /// Builds the self-service tier view for a user at `at`.
    ///
    /// The effective percentage is produced by the same resolution as
    /// `resolve_effective_bonus`, so the two never disagree. A campaign is flagged as
    /// a promotion only when it is the deciding source.
    ///
    /// # Returns
    /// - `Ok(TierProgress)` - Current and next tier, stats and effective bonus
    /// - `Err(ReferralError::UserNotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn get_user_tier_progress(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<TierProgress, AppError> {
        self.require_user(user_id).await?;

        let stats = self.referral_stats(user_id).await?;
        let all_tiers = TierRepository::new(self.db).get_active_ascending().await?;
        let position = TierPosition::locate(&all_tiers, stats.total_referrals);
        let effective = self.resolve(user_id, stats.total_referrals, at).await?;

        Ok(TierProgress {
            stats,
            position,
            effective,
            all_tiers,
        })
    }

    /// Counts total and active referrals of a user.
    pub async fn referral_stats(&self, user_id: &str) -> Result<ReferralStats, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(ReferralStats {
            total_referrals: user_repo.count_referrals(user_id).await?,
            active_referrals: user_repo.count_active_referrals(user_id).await?,
        })
    }

    async fn require_user(&self, user_id: &str) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ReferralError::UserNotFound(user_id.to_string()).into()),
        }
    }

    async fn resolve(
        &self,
        user_id: &str,
        referral_count: u64,
        at: DateTime<Utc>,
    ) -> Result<EffectiveBonus, AppError> {
        let provenance = self.find_provenance(user_id, referral_count, at).await?;

        if provenance.is_none() {
            tracing::warn!(
                "No referral tier matches {} referrals for user {}, using the default percentage",
                referral_count,
                user_id
            );
        }

        Ok(EffectiveBonus {
            user_id: user_id.to_string(),
            referral_count,
            provenance,
        })
    }

    async fn find_provenance(
        &self,
        user_id: &str,
        referral_count: u64,
        at: DateTime<Utc>,
    ) -> Result<Option<Provenance>, AppError> {
        if let Some(client_override) = ClientOverrideRepository::new(self.db)
            .find_active_for_user(user_id, at)
            .await?
        {
            return Ok(Some(Provenance::IndividualOverride(client_override)));
        }

        if let Some(campaign) = GlobalOverrideRepository::new(self.db)
            .find_active(at)
            .await?
        {
            return Ok(Some(Provenance::GlobalCampaign(campaign)));
        }

        let tier = TierRepository::new(self.db)
            .find_for_count(referral_count)
            .await?;

        Ok(tier.map(Provenance::Tier))
    }
}
