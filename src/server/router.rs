use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        analytics::{
            __path_get_advanced_metrics, __path_get_client_analytics, __path_get_game_analytics,
            __path_get_platform_trends, __path_get_risk_exposure, __path_get_risk_snapshot,
            get_advanced_metrics, get_client_analytics, get_game_analytics, get_platform_trends,
            get_risk_exposure, get_risk_snapshot,
        },
        bonus::{__path_get_effective_bonus, __path_get_my_tier, get_effective_bonus, get_my_tier},
        client_override::{
            __path_create_client_override, __path_delete_client_override,
            __path_get_client_overrides, __path_update_client_override, create_client_override,
            delete_client_override, get_client_overrides, update_client_override,
        },
        global_override::{
            __path_create_global_override, __path_delete_global_override,
            __path_get_global_overrides, __path_update_global_override, create_global_override,
            delete_global_override, get_global_overrides, update_global_override,
        },
        tier::{__path_get_tiers, __path_update_tier, get_tiers, update_tier},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "bonusdesk",
    description = "Referral bonus resolution and platform analytics"
))]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_tiers))
        .routes(routes!(update_tier))
        .routes(routes!(get_global_overrides, create_global_override))
        .routes(routes!(update_global_override, delete_global_override))
        .routes(routes!(get_client_overrides, create_client_override))
        .routes(routes!(update_client_override, delete_client_override))
        .routes(routes!(get_effective_bonus))
        .routes(routes!(get_my_tier))
        .routes(routes!(get_risk_snapshot))
        .routes(routes!(get_platform_trends))
        .routes(routes!(get_risk_exposure))
        .routes(routes!(get_client_analytics))
        .routes(routes!(get_game_analytics))
        .routes(routes!(get_advanced_metrics))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
