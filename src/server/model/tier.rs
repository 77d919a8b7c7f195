//! Referral tier domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        bonus::TierSummaryDto,
        tier::{TierDto, UpdateTierDto},
    },
    server::{error::referral::ReferralError, model::bonus::validate_percentage},
};

/// Seed definition for one default band.
pub struct DefaultTier {
    pub tier_id: &'static str,
    pub tier_name: &'static str,
    pub min_referrals: i32,
    pub max_referrals: Option<i32>,
    pub bonus_percentage: f64,
    pub description: &'static str,
}

/// Bands inserted into an empty tier table at startup.
pub const DEFAULT_TIERS: [DefaultTier; 5] = [
    DefaultTier {
        tier_id: "STARTER",
        tier_name: "Starter",
        min_referrals: 0,
        max_referrals: Some(6),
        bonus_percentage: 10.0,
        description: "Entry level - 0-6 referrals",
    },
    DefaultTier {
        tier_id: "SILVER",
        tier_name: "Silver",
        min_referrals: 7,
        max_referrals: Some(14),
        bonus_percentage: 15.0,
        description: "Silver tier - 7-14 referrals",
    },
    DefaultTier {
        tier_id: "GOLD",
        tier_name: "Gold",
        min_referrals: 15,
        max_referrals: Some(29),
        bonus_percentage: 20.0,
        description: "Gold tier - 15-29 referrals",
    },
    DefaultTier {
        tier_id: "PLATINUM",
        tier_name: "Platinum",
        min_referrals: 30,
        max_referrals: Some(49),
        bonus_percentage: 25.0,
        description: "Platinum tier - 30-49 referrals",
    },
    DefaultTier {
        tier_id: "RUBY",
        tier_name: "Ruby",
        min_referrals: 50,
        max_referrals: None,
        bonus_percentage: 30.0,
        description: "Ruby tier - 50+ referrals (highest)",
    },
];

/// A referral-count band mapped to a bonus percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    pub tier_id: String,
    pub tier_name: String,
    /// Inclusive lower bound.
    pub min_referrals: i32,
    /// Inclusive upper bound, `None` is unbounded.
    pub max_referrals: Option<i32>,
    pub bonus_percentage: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tier {
    pub fn into_dto(self) -> TierDto {
        TierDto {
            tier_id: self.tier_id,
            tier_name: self.tier_name,
            min_referrals: self.min_referrals,
            max_referrals: self.max_referrals,
            bonus_percentage: self.bonus_percentage,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> TierSummaryDto {
        TierSummaryDto {
            tier_name: self.tier_name,
            min_referrals: self.min_referrals,
            max_referrals: self.max_referrals,
            bonus_percentage: self.bonus_percentage,
        }
    }

    pub fn from_entity(entity: entity::referral_tier::Model) -> Self {
        Self {
            tier_id: entity.tier_id,
            tier_name: entity.tier_name,
            min_referrals: entity.min_referrals,
            max_referrals: entity.max_referrals,
            bonus_percentage: entity.bonus_percentage,
            description: entity.description,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether `referral_count` falls inside this band, both bounds inclusive.
    pub fn contains(&self, referral_count: u64) -> bool {
        let count = referral_count as i64;

        count >= self.min_referrals as i64
            && self.max_referrals.map_or(true, |max| count <= max as i64)
    }
}

/// Replacement values for every mutable tier field.
#[derive(Debug, Clone)]
pub struct UpdateTierParams {
    pub tier_id: String,
    pub tier_name: String,
    pub min_referrals: i32,
    pub max_referrals: Option<i32>,
    pub bonus_percentage: f64,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateTierParams {
    pub fn from_dto(tier_id: String, dto: UpdateTierDto) -> Self {
        Self {
            tier_id,
            tier_name: dto.tier_name,
            min_referrals: dto.min_referrals,
            max_referrals: dto.max_referrals,
            bonus_percentage: dto.bonus_percentage,
            description: dto.description,
            is_active: dto.is_active,
        }
    }

    /// Checks the record on its own. Coverage and overlap against other tiers are
    /// not checked; lookup prefers the highest matching band instead.
    ///
    /// # Returns
    /// - `Ok(())` - Values describe a valid band
    /// - `Err(ReferralError::InvalidPercentage)` - Percentage outside `0..=100`
    /// - `Err(ReferralError::InvalidTierBounds)` - Negative minimum or `max < min`
    pub fn validate(&self) -> Result<(), ReferralError> {
        validate_percentage(self.bonus_percentage)?;

        let bounds_ok = self.min_referrals >= 0
            && self
                .max_referrals
                .map_or(true, |max| max >= self.min_referrals);

        if !bounds_ok {
            return Err(ReferralError::InvalidTierBounds {
                min: self.min_referrals,
                max: self.max_referrals,
            });
        }

        Ok(())
    }
}

/// Tracks where a referral count sits on the ascending tier ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPosition {
    /// Highest tier whose minimum the count has reached.
    pub current: Option<Tier>,
    /// First tier whose minimum the count has not reached.
    pub next: Option<Tier>,
}

impl TierPosition {
    /// Walks `tiers`, which must be sorted by `min_referrals` ascending.
    pub fn locate(tiers: &[Tier], referral_count: u64) -> Self {
        let mut current = None;
        let mut next = None;

        for tier in tiers {
            if referral_count as i64 >= tier.min_referrals as i64 {
                current = Some(tier.clone());
            } else if next.is_none() {
                next = Some(tier.clone());
            }
        }

        Self { current, next }
    }

    pub fn referrals_to_next(&self, referral_count: u64) -> Option<u64> {
        self.next
            .as_ref()
            .map(|tier| (tier.min_referrals as i64 - referral_count as i64).max(0) as u64)
    }
}
