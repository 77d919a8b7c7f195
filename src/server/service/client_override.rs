use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{client_override::ClientOverrideRepository, user::UserRepository},
    error::{referral::ReferralError, AppError},
    model::client_override::{
        ClientOverrideEntry, ClientOverrideUpsert, PatchClientOverrideParams,
        UpsertClientOverrideParams,
    },
};

pub struct ClientOverrideService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientOverrideService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every client override newest first with the user's names
    pub async fn list(&self) -> Result<Vec<ClientOverrideEntry>, AppError> {
        Ok(ClientOverrideRepository::new(self.db)
            .get_all_with_users()
            .await?)
    }

    /// Creates the user's override, replacing any existing one
    ///
    /// Replacing re-activates the override.
    pub async fn create(
        &self,
        params: UpsertClientOverrideParams,
        at: DateTime<Utc>,
    ) -> Result<ClientOverrideUpsert, AppError> {
        params.validate()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(&params.user_id)
            .await?
        else {
            return Err(ReferralError::UserNotFound(params.user_id).into());
        };

        let (client_override, created) = ClientOverrideRepository::new(self.db)
            .upsert(params, at)
            .await?;

        Ok(ClientOverrideUpsert {
            created,
            entry: ClientOverrideEntry {
                client_override,
                username: Some(user.username),
                display_name: user.display_name,
            },
        })
    }

    /// Applies a partial update to the user's override
    pub async fn update(
        &self,
        user_id: &str,
        params: PatchClientOverrideParams,
        at: DateTime<Utc>,
    ) -> Result<ClientOverrideEntry, AppError> {
        params.validate()?;

        let Some(client_override) = ClientOverrideRepository::new(self.db)
            .patch(user_id, params, at)
            .await?
        else {
            return Err(ReferralError::ClientOverrideNotFound(user_id.to_string()).into());
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(ClientOverrideEntry {
            client_override,
            username: user.as_ref().map(|u| u.username.clone()),
            display_name: user.and_then(|u| u.display_name),
        })
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        let deleted = ClientOverrideRepository::new(self.db)
            .delete(user_id)
            .await?;

        if !deleted {
            return Err(ReferralError::ClientOverrideNotFound(user_id.to_string()).into());
        }

        Ok(())
    }
}
