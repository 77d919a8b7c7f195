//! Effective bonus resolution results.
//!
//! Exactly one source decides a user's percentage, checked in the order individual
//! override, global campaign, tier, and finally the hardcoded default.

use crate::{
    model::bonus::{BonusSourceDto, EffectiveBonusDto, MyTierDto, ProvenanceDto},
    server::{
        error::referral::ReferralError,
        model::{
            client_override::ClientOverride,
            global_override::GlobalOverride,
            tier::{Tier, TierPosition},
        },
    },
};

/// Starter baseline used when no tier matches the referral count.
pub const DEFAULT_BONUS_PERCENTAGE: f64 = 10.0;
pub const DEFAULT_TIER_NAME: &str = "Starter";

/// Rejects percentages outside `0..=100` and non-finite values.
pub fn validate_percentage(value: f64) -> Result<f64, ReferralError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ReferralError::InvalidPercentage(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusSource {
    IndividualOverride,
    GlobalCampaign,
    Tier,
    Default,
}

impl BonusSource {
    pub fn into_dto(self) -> BonusSourceDto {
        match self {
            Self::IndividualOverride => BonusSourceDto::IndividualOverride,
            Self::GlobalCampaign => BonusSourceDto::GlobalCampaign,
            Self::Tier => BonusSourceDto::Tier,
            Self::Default => BonusSourceDto::Default,
        }
    }
}

/// The record that decided the percentage.
#[derive(Debug, Clone, PartialEq)]
pub enum Provenance {
    IndividualOverride(ClientOverride),
    GlobalCampaign(GlobalOverride),
    Tier(Tier),
}

impl Provenance {
    pub fn source(&self) -> BonusSource {
        match self {
            Self::IndividualOverride(_) => BonusSource::IndividualOverride,
            Self::GlobalCampaign(_) => BonusSource::GlobalCampaign,
            Self::Tier(_) => BonusSource::Tier,
        }
    }

    pub fn percentage(&self) -> f64 {
        match self {
            Self::IndividualOverride(client_override) => client_override.bonus_percentage,
            Self::GlobalCampaign(campaign) => campaign.bonus_percentage,
            Self::Tier(tier) => tier.bonus_percentage,
        }
    }

    pub fn into_dto(self) -> ProvenanceDto {
        match self {
            Self::IndividualOverride(client_override) => ProvenanceDto::IndividualOverride {
                override_id: client_override.override_id,
                reason: client_override.reason,
                expires_at: client_override.expires_at,
            },
            Self::GlobalCampaign(campaign) => ProvenanceDto::GlobalCampaign {
                override_id: campaign.override_id,
                campaign_name: campaign.name,
                description: campaign.description,
                start_date: campaign.start_date,
                end_date: campaign.end_date,
            },
            Self::Tier(tier) => ProvenanceDto::Tier {
                tier_id: tier.tier_id,
                tier_name: tier.tier_name,
                description: tier.description,
            },
        }
    }
}

/// Resolved bonus for one user at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveBonus {
    pub user_id: String,
    pub referral_count: u64,
    /// `None` when the default percentage applies.
    pub provenance: Option<Provenance>,
}

impl EffectiveBonus {
    pub fn source(&self) -> BonusSource {
        self.provenance
            .as_ref()
            .map_or(BonusSource::Default, Provenance::source)
    }

    pub fn percentage(&self) -> f64 {
        self.provenance
            .as_ref()
            .map_or(DEFAULT_BONUS_PERCENTAGE, Provenance::percentage)
    }

    /// The campaign behind this bonus, if a campaign decided it.
    pub fn campaign(&self) -> Option<&GlobalOverride> {
        match &self.provenance {
            Some(Provenance::GlobalCampaign(campaign)) => Some(campaign),
            _ => None,
        }
    }

    pub fn into_dto(self) -> EffectiveBonusDto {
        EffectiveBonusDto {
            effective_percentage: self.percentage(),
            source: self.source().into_dto(),
            user_id: self.user_id,
            referral_count: self.referral_count,
            provenance: self.provenance.map(Provenance::into_dto),
        }
    }
}

/// Total and active referred accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralStats {
    pub total_referrals: u64,
    /// Referred accounts that are active and have deposited.
    pub active_referrals: u64,
}

/// Self-service view of a user's tier standing and current bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct TierProgress {
    pub stats: ReferralStats,
    pub position: TierPosition,
    pub effective: EffectiveBonus,
    /// Active tiers ordered by `min_referrals` ascending.
    pub all_tiers: Vec<Tier>,
}

impl TierProgress {
    /// A campaign is only advertised when it is the source actually in effect, so an
    /// individual override hides it.
    pub fn promotion(&self) -> Option<&GlobalOverride> {
        self.effective.campaign()
    }

    pub fn into_dto(self) -> MyTierDto {
        let referral_count = self.stats.total_referrals;
        let referrals_to_next = self.position.referrals_to_next(referral_count);
        let promotion_name = self.promotion().map(|campaign| campaign.name.clone());
        let effective_percentage = self.effective.percentage();
        let effective_source = self.effective.source().into_dto();

        let (current_tier, current_tier_percentage) = match self.position.current {
            Some(tier) => (tier.tier_name, tier.bonus_percentage),
            None => (DEFAULT_TIER_NAME.to_string(), DEFAULT_BONUS_PERCENTAGE),
        };

        let (next_tier, next_tier_percentage) = match self.position.next {
            Some(tier) => (Some(tier.tier_name), Some(tier.bonus_percentage)),
            None => (None, None),
        };

        MyTierDto {
            referral_count,
            active_referrals: self.stats.active_referrals,
            current_tier,
            current_tier_percentage,
            effective_percentage,
            effective_source,
            next_tier,
            next_tier_percentage,
            referrals_to_next,
            promotion_active: promotion_name.is_some(),
            promotion_name,
            all_tiers: self
                .all_tiers
                .into_iter()
                .map(Tier::into_summary_dto)
                .collect(),
        }
    }
}
