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
        tier::{TierDto, TierListDto, UpdateTierDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::tier::{Tier, UpdateTierParams},
        service::tier::TierService,
        state::AppState,
    },
};

/// Tag for grouping referral tier endpoints in OpenAPI documentation
pub static TIER_TAG: &str = "referral-tier";

/// List every referral tier.
///
/// Returns all tiers, active or not, ordered by `min_referrals` ascending.
///
/// # Access Control
/// - `Admin` - Only admins can view the tier table
///
/// # Returns
/// - `200 OK` - Tier table
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/referral-tiers/tiers",
    tag = TIER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tiers", body = TierListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tiers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let tiers = TierService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(TierListDto {
            tiers: tiers.into_iter().map(Tier::into_dto).collect(),
        }),
    ))
}

/// Replace a referral tier.
///
/// Every mutable field is replaced. The percentage must lie in `0..=100` and a bounded
/// tier needs `max_referrals >= min_referrals`; overlap with other tiers is not checked.
///
/// # Access Control
/// - `Admin` - Only admins can edit tiers
///
/// # Returns
/// - `200 OK` - Updated tier
/// - `400 Bad Request` - Invalid percentage or bounds
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No tier with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/referral-tiers/tiers/{tier_id}",
    tag = TIER_TAG,
    params(
        ("tier_id" = String, Path, description = "Tier id, e.g. SILVER")
    ),
    request_body = UpdateTierDto,
    responses(
        (status = 200, description = "Successfully updated tier", body = TierDto),
        (status = 400, description = "Invalid tier data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Tier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tier(
    State(state): State<AppState>,
    session: Session,
    Path(tier_id): Path<String>,
    Json(payload): Json<UpdateTierDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateTierParams::from_dto(tier_id, payload);
    let tier = TierService::new(&state.db)
        .update(params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(tier.into_dto())))
}
