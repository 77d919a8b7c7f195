use crate::server::{
    data::client_override::ClientOverrideRepository,
    model::client_override::{PatchClientOverrideParams, UpsertClientOverrideParams},
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::reference_time};

mod delete;
mod find_active_for_user;
mod get_all_with_users;
mod patch;
