use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TierDto {
    pub tier_id: String,
    pub tier_name: String,
    pub min_referrals: i32,
    /// `null` means the band has no upper bound.
    pub max_referrals: Option<i32>,
    pub bonus_percentage: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TierListDto {
    pub tiers: Vec<TierDto>,
}

/// Replaces every mutable field of a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTierDto {
    pub tier_name: String,
    pub min_referrals: i32,
    pub max_referrals: Option<i32>,
    pub bonus_percentage: f64,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

pub(crate) fn default_true() -> bool {
    true
}
