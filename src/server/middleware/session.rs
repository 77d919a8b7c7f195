//! Type-safe session access.
//!
//! Login itself is owned by the platform's account service, which writes the
//! authenticated user id into the shared session store under `auth:user`. This module
//! only reads that key.

use tower_sessions::Session;

use crate::server::error::AppError;

pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Wraps the tower-sessions `Session` so callers cannot mistype the key or value type.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated user's id in the session.
    ///
    /// Production sessions are written by the account service, so only tests sign
    /// users in here.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    #[cfg(test)]
    pub async fn set_user_id(&self, user_id: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        let user_id = self.session.get::<String>(SESSION_AUTH_USER_ID).await?;

        Ok(user_id.filter(|id| !id.is_empty()))
    }
}
