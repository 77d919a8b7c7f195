//! Referral tier fixtures.
//!
//! The five default bands match what the service seeds on first start.

use chrono::{TimeZone, Utc};
use entity::referral_tier;

/// Default bands as `(tier_id, tier_name, min, max, percentage, description)`.
pub const DEFAULT_TIERS: [(&str, &str, i32, Option<i32>, f64, &str); 5] = [
    (
        "STARTER",
        "Starter",
        0,
        Some(6),
        10.0,
        "Entry level - 0-6 referrals",
    ),
    (
        "SILVER",
        "Silver",
        7,
        Some(14),
        15.0,
        "Silver tier - 7-14 referrals",
    ),
    (
        "GOLD",
        "Gold",
        15,
        Some(29),
        20.0,
        "Gold tier - 15-29 referrals",
    ),
    (
        "PLATINUM",
        "Platinum",
        30,
        Some(49),
        25.0,
        "Platinum tier - 30-49 referrals",
    ),
    (
        "RUBY",
        "Ruby",
        50,
        None,
        30.0,
        "Ruby tier - 50+ referrals (highest)",
    ),
];

/// Creates the five default tier models, all active, ordered by `min_referrals`.
///
/// # Returns
/// - `Vec<referral_tier::Model>` - In-memory tier entities
pub fn default_tiers() -> Vec<referral_tier::Model> {
    let seeded_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    DEFAULT_TIERS
        .iter()
        .map(
            |(tier_id, tier_name, min, max, pct, description)| referral_tier::Model {
                tier_id: tier_id.to_string(),
                tier_name: tier_name.to_string(),
                min_referrals: *min,
                max_referrals: *max,
                bonus_percentage: *pct,
                description: Some(description.to_string()),
                is_active: true,
                created_at: seeded_at,
                updated_at: seeded_at,
            },
        )
        .collect()
}
