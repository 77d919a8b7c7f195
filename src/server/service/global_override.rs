use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::global_override::GlobalOverrideRepository,
    error::{referral::ReferralError, AppError},
    model::global_override::{GlobalOverride, GlobalOverrideListing, GlobalOverrideParams},
};

pub struct GlobalOverrideService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GlobalOverrideService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every campaign along with the one in effect at `at`
    ///
    /// The active campaign comes from the same query bonus resolution uses.
    pub async fn list(&self, at: DateTime<Utc>) -> Result<GlobalOverrideListing, AppError> {
        let repo = GlobalOverrideRepository::new(self.db);

        Ok(GlobalOverrideListing {
            overrides: repo.get_all().await?,
            active_override: repo.find_active(at).await?,
        })
    }

    pub async fn create(
        &self,
        params: GlobalOverrideParams,
        created_by: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<GlobalOverride, AppError> {
        params.validate()?;

        Ok(GlobalOverrideRepository::new(self.db)
            .create(params, created_by, at)
            .await?)
    }

    pub async fn update(
        &self,
        override_id: &str,
        params: GlobalOverrideParams,
        at: DateTime<Utc>,
    ) -> Result<GlobalOverride, AppError> {
        params.validate()?;

        GlobalOverrideRepository::new(self.db)
            .update(override_id, params, at)
            .await?
            .ok_or_else(|| ReferralError::GlobalOverrideNotFound(override_id.to_string()).into())
    }

    pub async fn delete(&self, override_id: &str) -> Result<(), AppError> {
        let deleted = GlobalOverrideRepository::new(self.db)
            .delete(override_id)
            .await?;

        if !deleted {
            return Err(ReferralError::GlobalOverrideNotFound(override_id.to_string()).into());
        }

        Ok(())
    }
}
