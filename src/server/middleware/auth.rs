use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every requested permission.
    ///
    /// Deactivated accounts are treated as absent.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user id in session
    /// - `Err(AuthError::UserNotInDatabase)` - Unknown or inactive user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user = match user_repo.find_by_id(&user_id).await? {
            Some(user) if user.is_active => user,
            _ => return Err(AuthError::UserNotInDatabase(user_id).into()),
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access an admin endpoint without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
