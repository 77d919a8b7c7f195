use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which rule produced an effective bonus percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BonusSourceDto {
    IndividualOverride,
    GlobalCampaign,
    Tier,
    Default,
}

/// Detail record of the rule that decided the percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProvenanceDto {
    IndividualOverride {
        override_id: String,
        reason: String,
        expires_at: Option<DateTime<Utc>>,
    },
    GlobalCampaign {
        override_id: String,
        campaign_name: String,
        description: Option<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    },
    Tier {
        tier_id: String,
        tier_name: String,
        description: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EffectiveBonusDto {
    pub user_id: String,
    pub referral_count: u64,
    pub effective_percentage: f64,
    pub source: BonusSourceDto,
    /// `null` when the default percentage applies.
    pub provenance: Option<ProvenanceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TierSummaryDto {
    pub tier_name: String,
    pub min_referrals: i32,
    pub max_referrals: Option<i32>,
    pub bonus_percentage: f64,
}

/// Self-service view of the caller's referral standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MyTierDto {
    pub referral_count: u64,
    pub active_referrals: u64,
    pub current_tier: String,
    pub current_tier_percentage: f64,
    pub effective_percentage: f64,
    pub effective_source: BonusSourceDto,
    pub next_tier: Option<String>,
    pub next_tier_percentage: Option<f64>,
    pub referrals_to_next: Option<u64>,
    pub promotion_active: bool,
    pub promotion_name: Option<String>,
    pub all_tiers: Vec<TierSummaryDto>,
}
