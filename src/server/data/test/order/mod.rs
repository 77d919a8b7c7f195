use crate::server::data::order::OrderRepository;
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::reference_time};

mod get_pending_withdrawals;
