//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, block_routes, content_routes, platform_menu_routes, portfolio_menu_routes,
    portfolio_routes, public_routes, review_routes, session_routes, user_routes,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    let admin = Router::new()
        .merge(session_routes())
        .nest("/users", user_routes())
        .nest("/platform-menus", platform_menu_routes())
        .nest("/menus", portfolio_menu_routes())
        .nest("/blocks", block_routes())
        .nest("/portfolio", portfolio_routes())
        .nest("/review", review_routes())
        .nest("/content", content_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/auth", auth_routes())
        .nest("/p", public_routes())
        .nest("/admin", admin)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
    cache: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServiceStatus {
    fn healthy() -> Self {
        Self {
            status: "healthy",
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy",
            error: Some(error),
        }
    }
}

/// Health check with database and cache connectivity.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = match state.database.ping().await {
        Ok(_) => ServiceStatus::healthy(),
        Err(e) => ServiceStatus::unhealthy(e.to_string()),
    };

    let cache_status = match state.revalidator.ping().await {
        Ok(_) => ServiceStatus::healthy(),
        Err(e) => ServiceStatus::unhealthy(e.to_string()),
    };

    let all_healthy = db_status.error.is_none() && cache_status.error.is_none();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth {
            database: db_status,
            cache: cache_status,
        },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
