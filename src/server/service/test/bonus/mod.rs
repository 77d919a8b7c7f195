use crate::server::{
    error::{referral::ReferralError, AppError},
    model::{bonus::BonusSource, global_override::GlobalOverrideParams},
    service::{
        bonus::BonusService, client_override::ClientOverrideService,
        global_override::GlobalOverrideService,
    },
};
use chrono::Duration;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{
        client_override::ClientOverrideFactory, global_override::GlobalOverrideFactory,
        helpers::reference_time,
    },
};

mod get_user_tier_progress;
mod referral_stats;
mod resolve_effective_bonus;
