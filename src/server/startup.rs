use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, service::tier::TierService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the same Sqlite database.
///
/// Sessions are written by the external authentication service; this service only
/// reads the authenticated user id out of them.
///
/// # Returns
/// - `Ok(SessionManagerLayer<SqliteStore>)` - Session layer with a migrated store
/// - `Err(AppError::InternalError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Seeds the five default referral tiers when the tier table is empty.
///
/// # Returns
/// - `Ok(())` - Tiers already present or seeded
/// - `Err(AppError::DbErr)` - Database error while counting or inserting
pub async fn seed_default_tiers(db: &DatabaseConnection) -> Result<(), AppError> {
    let seeded = TierService::new(db).seed_defaults().await?;

    if seeded > 0 {
        tracing::info!("Seeded {} default referral tiers", seeded);
    }

    Ok(())
}
