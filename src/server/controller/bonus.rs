use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bonus::{EffectiveBonusDto, MyTierDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::bonus::BonusService,
        state::AppState,
    },
};

/// Tag for grouping bonus resolution endpoints in OpenAPI documentation
pub static BONUS_TAG: &str = "bonus";

/// Resolve the bonus percentage currently in effect for a user.
///
/// Sources are checked in order individual override, global campaign, tier band and
/// finally the 10% default. The response names the deciding source and record.
///
/// # Access Control
/// - `Admin` - Only admins can inspect another user's bonus
///
/// # Returns
/// - `200 OK` - Effective percentage with provenance
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/referral-tiers/effective-bonus/{user_id}",
    tag = BONUS_TAG,
    params(
        ("user_id" = String, Path, description = "User to resolve the bonus for")
    ),
    responses(
        (status = 200, description = "Successfully resolved bonus", body = EffectiveBonusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_effective_bonus(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bonus = BonusService::new(&state.db)
        .resolve_effective_bonus(&user_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(bonus.into_dto())))
}

/// Get the logged in user's tier standing.
///
/// # Access Control
/// - Any logged in user, for their own account only
///
/// # Returns
/// - `200 OK` - Current and next tier, referral counts and effective bonus
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/referral-tiers/my-tier",
    tag = BONUS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tier progress", body = MyTierDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_tier(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let progress = BonusService::new(&state.db)
        .get_user_tier_progress(&user.user_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}
