//! Referral earning data repository.

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::analytics::{ReferralEarning, PAID_EARNING_STATUSES};

/// Repository providing read operations over referral earnings.
pub struct ReferralEarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferralEarningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paid earnings created in `[start, end]`.
    ///
    /// Paid covers the `paid`, `credited` and `completed` statuses.
    ///
    /// # Returns
    /// - `Ok(Vec<ReferralEarning>)` - Paid earnings in range
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paid_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReferralEarning>, DbErr> {
        let entities = entity::prelude::ReferralEarning::find()
            .filter(entity::referral_earning::Column::Status.is_in(PAID_EARNING_STATUSES))
            .filter(entity::referral_earning::Column::CreatedAt.gte(start))
            .filter(entity::referral_earning::Column::CreatedAt.lte(end))
            .order_by_asc(entity::referral_earning::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ReferralEarning::from_entity)
            .collect())
    }
}
