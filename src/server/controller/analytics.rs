use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        analytics::{
            AdvancedMetricsDto, ClientAnalyticsDto, GameAnalyticsDto, PlatformTrendsDto,
            RiskExposureDto, RiskSnapshotDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::analytics::AnalyticsService,
        state::AppState,
        util::timezone::{clamp_days, client_offset},
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

#[derive(Deserialize)]
pub struct DaysParams {
    pub days: Option<i64>,
}

/// Dashboard risk snapshot.
///
/// Total client balance, the largest single cashout a recent deposit could reach, the
/// balance-capped probable cashout and pressure from pending withdrawals.
///
/// # Access Control
/// - `Admin` - Only admins can view analytics
///
/// # Returns
/// - `200 OK` - Snapshot
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/analytics/risk-snapshot",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Successfully computed risk snapshot", body = RiskSnapshotDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_risk_snapshot(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let snapshot = AnalyticsService::new(&state.db)
        .risk_snapshot(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(snapshot)))
}

/// Daily platform trends.
///
/// Days are bounded in the caller's local time, read from the `X-Client-TZ-Offset`
/// header in minutes west of UTC (the browser `getTimezoneOffset()` value). A missing
/// or invalid header means UTC.
///
/// # Access Control
/// - `Admin` - Only admins can view analytics
///
/// # Returns
/// - `200 OK` - One bucket per day, oldest first, plus period totals
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/analytics/platform-trends",
    tag = ANALYTICS_TAG,
    params(
        ("days" = Option<i64>, Query, description = "Number of days, 1 to 365 (default: 30)"),
        ("X-Client-TZ-Offset" = Option<i32>, Header, description = "Client UTC offset in minutes, positive west")
    ),
    responses(
        (status = 200, description = "Successfully computed platform trends", body = PlatformTrendsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_platform_trends(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(params): Query<DaysParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let trends = AnalyticsService::new(&state.db)
        .platform_trends(Utc::now(), client_offset(&headers), clamp_days(params.days))
        .await?;

    Ok((StatusCode::OK, Json(trends)))
}

/// Full risk and exposure report.
///
/// # Access Control
/// - `Admin` - Only admins can view analytics
///
/// # Returns
/// - `200 OK` - Platform exposure, probable max cashout, bonus risk and risk tables
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/analytics/risk-exposure",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Successfully computed risk exposure", body = RiskExposureDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_risk_exposure(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = AnalyticsService::new(&state.db).risk_exposure().await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Drill-down for one client.
///
/// # Access Control
/// - `Admin` - Only admins can view analytics
///
/// # Returns
/// - `200 OK` - Balances, withdrawal status, cashout projection and lifetime stats
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/analytics/client/{user_id}",
    tag = ANALYTICS_TAG,
    params(
        ("user_id" = String, Path, description = "Client account id")
    ),
    responses(
        (status = 200, description = "Successfully computed client analytics", body = ClientAnalyticsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_analytics(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = AnalyticsService::new(&state.db)
        .client_analytics(&user_id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Drill-down for one game.
///
/// # Access Control
/// - `Admin` - Only admins can view analytics
///
/// # Returns
/// - `200 OK` - Financials, bonus figures, players and exposure
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No such game
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/analytics/game/{game_name}",
    tag = ANALYTICS_TAG,
    params(
        ("game_name" = String, Path, description = "Game name")
    ),
    responses(
        (status = 200, description = "Successfully computed game analytics", body = GameAnalyticsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_analytics(
    State(state): State<AppState>,
    session: Session,
    Path(game_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = AnalyticsService::new(&state.db)
        .game_analytics(&game_name, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Efficiency metrics over a trailing window.
///
/// # Access Control
/// - `Admin` - Only admins can view analytics
///
/// # Returns
/// - `200 OK` - Conversion, multiplier, withdrawal timing and player mix metrics
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/analytics/advanced-metrics",
    tag = ANALYTICS_TAG,
    params(
        ("days" = Option<i64>, Query, description = "Window length in days, 1 to 365 (default: 30)")
    ),
    responses(
        (status = 200, description = "Successfully computed advanced metrics", body = AdvancedMetricsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advanced_metrics(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DaysParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let metrics = AnalyticsService::new(&state.db)
        .advanced_metrics(Utc::now(), clamp_days(params.days))
        .await?;

    Ok((StatusCode::OK, Json(metrics)))
}
