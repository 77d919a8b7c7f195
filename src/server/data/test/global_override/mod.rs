use crate::server::{
    data::global_override::GlobalOverrideRepository, model::global_override::GlobalOverrideParams,
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::reference_time};

mod create;
mod delete;

fn params(pct: f64) -> GlobalOverrideParams {
    let now = reference_time();
    GlobalOverrideParams {
        name: "Spring Boost".to_string(),
        bonus_percentage: pct,
        start_date: now - Duration::days(1),
        end_date: now + Duration::days(6),
        description: Some("Double referrals week".to_string()),
        is_active: true,
    }
}
