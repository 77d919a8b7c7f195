use crate::server::data::{game::GameRepository, settings::SettingsRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_cashout_multipliers;
