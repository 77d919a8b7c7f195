//! Referral earning factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a referral earning with the given status at `at`.
///
/// # Returns
/// - `Ok(entity::referral_earning::Model)` - Created earning
/// - `Err(DbErr)` - Database error during insert
pub async fn create_referral_earning(
    db: &DatabaseConnection,
    referrer_user_id: impl Into<String>,
    amount: f64,
    status: &str,
    at: DateTime<Utc>,
) -> Result<entity::referral_earning::Model, DbErr> {
    let id = next_id();
    entity::referral_earning::ActiveModel {
        earning_id: ActiveValue::Set(format!("earning_{}", id)),
        referrer_user_id: ActiveValue::Set(referrer_user_id.into()),
        referee_user_id: ActiveValue::Set(format!("referee_{}", id)),
        amount: ActiveValue::Set(amount),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(at),
    }
    .insert(db)
    .await
}
