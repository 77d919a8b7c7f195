mod model;
mod server;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    startup,
    state::AppState,
    util::timezone::CLIENT_TZ_OFFSET_HEADER,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    startup::seed_default_tiers(&db).await?;

    let mut router = server::router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_allowed_origin {
        let origin = origin.parse::<HeaderValue>().map_err(|e| {
            ConfigError::InvalidEnvVar("CORS_ALLOWED_ORIGIN".to_string(), e.to_string())
        })?;

        router = router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([
                    header::CONTENT_TYPE,
                    HeaderName::from_static(CLIENT_TZ_OFFSET_HEADER),
                ]),
        );
    }

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
