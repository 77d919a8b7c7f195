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
        client_override::{
            ClientOverrideDto, ClientOverrideListDto, ClientOverrideUpsertDto,
            CreateClientOverrideDto, UpdateClientOverrideDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::client_override::{
            ClientOverrideEntry, PatchClientOverrideParams, UpsertClientOverrideParams,
        },
        service::client_override::ClientOverrideService,
        state::AppState,
    },
};

/// Tag for grouping per-client override endpoints in OpenAPI documentation
pub static CLIENT_OVERRIDE_TAG: &str = "client-override";

/// List every client override, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can view client overrides
///
/// # Returns
/// - `200 OK` - Overrides joined with the account's username and display name
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/referral-tiers/client-overrides",
    tag = CLIENT_OVERRIDE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved client overrides", body = ClientOverrideListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_overrides(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let overrides = ClientOverrideService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(ClientOverrideListDto {
            overrides: overrides
                .into_iter()
                .map(ClientOverrideEntry::into_dto)
                .collect(),
        }),
    ))
}

/// Create or replace a user's override.
///
/// A user holds at most one override. Posting again replaces the percentage, expiry
/// and reason and re-enables the override.
///
/// # Access Control
/// - `Admin` - Only admins can grant overrides
///
/// # Returns
/// - `201 Created` - New override
/// - `200 OK` - Existing override replaced
/// - `400 Bad Request` - Invalid percentage
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Target user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/referral-tiers/client-overrides",
    tag = CLIENT_OVERRIDE_TAG,
    request_body = CreateClientOverrideDto,
    responses(
        (status = 201, description = "Successfully created client override", body = ClientOverrideUpsertDto),
        (status = 200, description = "Successfully replaced client override", body = ClientOverrideUpsertDto),
        (status = 400, description = "Invalid override data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client_override(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClientOverrideDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpsertClientOverrideParams::from_dto(payload, Some(admin.user_id));
    let upsert = ClientOverrideService::new(&state.db)
        .create(params, Utc::now())
        .await?;

    let status = if upsert.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(upsert.into_dto())))
}

/// Partially update a user's override.
///
/// Only fields present in the body change.
///
/// # Access Control
/// - `Admin` - Only admins can edit overrides
///
/// # Returns
/// - `200 OK` - Updated override
/// - `400 Bad Request` - Invalid percentage
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - User has no override
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/referral-tiers/client-overrides/{user_id}",
    tag = CLIENT_OVERRIDE_TAG,
    params(
        ("user_id" = String, Path, description = "User the override belongs to")
    ),
    request_body = UpdateClientOverrideDto,
    responses(
        (status = 200, description = "Successfully updated client override", body = ClientOverrideDto),
        (status = 400, description = "Invalid override data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Client override not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client_override(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateClientOverrideDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = PatchClientOverrideParams::from_dto(payload);
    let entry = ClientOverrideService::new(&state.db)
        .update(&user_id, params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Delete a user's override.
///
/// # Access Control
/// - `Admin` - Only admins can delete overrides
///
/// # Returns
/// - `204 No Content` - Override deleted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - User has no override
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/referral-tiers/client-overrides/{user_id}",
    tag = CLIENT_OVERRIDE_TAG,
    params(
        ("user_id" = String, Path, description = "User the override belongs to")
    ),
    responses(
        (status = 204, description = "Successfully deleted client override"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Client override not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client_override(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ClientOverrideService::new(&state.db)
        .delete(&user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
