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
        global_override::{GlobalOverrideDto, GlobalOverrideInputDto, GlobalOverrideListDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::global_override::GlobalOverrideParams,
        service::global_override::GlobalOverrideService,
        state::AppState,
    },
};

/// Tag for grouping campaign endpoints in OpenAPI documentation
pub static GLOBAL_OVERRIDE_TAG: &str = "global-override";

/// List every campaign and the one currently in effect.
///
/// `active_override` is the campaign bonus resolution would apply right now: the
/// highest percentage among enabled campaigns whose window contains the current time.
///
/// # Access Control
/// - `Admin` - Only admins can view campaigns
///
/// # Returns
/// - `200 OK` - Campaigns, newest start first, plus the active one
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/referral-tiers/global-overrides",
    tag = GLOBAL_OVERRIDE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved campaigns", body = GlobalOverrideListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_global_overrides(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let listing = GlobalOverrideService::new(&state.db)
        .list(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Create a campaign.
///
/// The calling admin is recorded as the campaign's author.
///
/// # Access Control
/// - `Admin` - Only admins can create campaigns
///
/// # Returns
/// - `201 Created` - Created campaign
/// - `400 Bad Request` - Invalid percentage or window
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/referral-tiers/global-overrides",
    tag = GLOBAL_OVERRIDE_TAG,
    request_body = GlobalOverrideInputDto,
    responses(
        (status = 201, description = "Successfully created campaign", body = GlobalOverrideDto),
        (status = 400, description = "Invalid campaign data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_global_override(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GlobalOverrideInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = GlobalOverrideParams::from_dto(payload);
    let campaign = GlobalOverrideService::new(&state.db)
        .create(params, Some(admin.user_id), Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(campaign.into_dto())))
}

/// Replace a campaign.
///
/// # Access Control
/// - `Admin` - Only admins can edit campaigns
///
/// # Returns
/// - `200 OK` - Updated campaign
/// - `400 Bad Request` - Invalid percentage or window
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No campaign with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/referral-tiers/global-overrides/{override_id}",
    tag = GLOBAL_OVERRIDE_TAG,
    params(
        ("override_id" = String, Path, description = "Campaign id")
    ),
    request_body = GlobalOverrideInputDto,
    responses(
        (status = 200, description = "Successfully updated campaign", body = GlobalOverrideDto),
        (status = 400, description = "Invalid campaign data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_global_override(
    State(state): State<AppState>,
    session: Session,
    Path(override_id): Path<String>,
    Json(payload): Json<GlobalOverrideInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = GlobalOverrideParams::from_dto(payload);
    let campaign = GlobalOverrideService::new(&state.db)
        .update(&override_id, params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Delete a campaign.
///
/// # Access Control
/// - `Admin` - Only admins can delete campaigns
///
/// # Returns
/// - `204 No Content` - Campaign deleted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No campaign with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/referral-tiers/global-overrides/{override_id}",
    tag = GLOBAL_OVERRIDE_TAG,
    params(
        ("override_id" = String, Path, description = "Campaign id")
    ),
    responses(
        (status = 204, description = "Successfully deleted campaign"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_global_override(
    State(state): State<AppState>,
    session: Session,
    Path(override_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    GlobalOverrideService::new(&state.db)
        .delete(&override_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
