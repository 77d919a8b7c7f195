use crate::server::{
    error::{referral::ReferralError, AppError},
    model::global_override::GlobalOverrideParams,
    service::global_override::GlobalOverrideService,
};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory, factory::helpers::reference_time};


fn params(pct: f64) -> GlobalOverrideParams {
    let now = reference_time();
    GlobalOverrideParams {
        name: "Weekend Rush".to_string(),
        bonus_percentage: pct,
        start_date: now - Duration::hours(6),
        end_date: now + Duration::days(2),
        description: None,
        is_active: true,
    }
}
