use crate::server::{data::tier::TierRepository, model::tier::UpdateTierParams};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::reference_time};

mod get_active_ascending;
mod insert_defaults;
mod update;
