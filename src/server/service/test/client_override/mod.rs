use crate::server::{
    error::{referral::ReferralError, AppError},
    model::client_override::{PatchClientOverrideParams, UpsertClientOverrideParams},
    service::client_override::ClientOverrideService,
};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory, factory::helpers::reference_time};

mod delete;
mod update;

fn params(user_id: &str, pct: f64) -> UpsertClientOverrideParams {
    UpsertClientOverrideParams {
        user_id: user_id.to_string(),
        bonus_percentage: pct,
        expires_at: Some(reference_time() + Duration::days(30)),
        reason: "Affiliate deal".to_string(),
        created_by: Some("admin-1".to_string()),
    }
}
