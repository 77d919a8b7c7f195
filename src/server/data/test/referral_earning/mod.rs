use crate::server::data::referral_earning::ReferralEarningRepository;
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::reference_time};

mod get_paid_between;
