//! Menu handlers: the platform catalog and per-portfolio menu editing.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{BlockData, MenuBlock, PlatformMenu, PortfolioMenu, PortfolioMenuView, RequestContext};
use crate::errors::AppResult;
use crate::services::{CreatePlatformMenu, UpdatePlatformMenu};
use crate::types::{Created, NoContent};

#[derive(Debug, Deserialize, ToSchema)]
pub struct VisibilityRequest {
    pub visible: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderRequest {
    /// Every menu instance of the portfolio, in the desired order
    pub ids: Vec<Uuid>,
}

/// Platform catalog routes (super-admin).
pub fn platform_menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_platform_menus).post(create_platform_menu))
        .route("/:id", put(update_platform_menu).delete(delete_platform_menu))
}

/// Per-portfolio menu routes.
pub fn portfolio_menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_menus))
        .route("/reorder", put(reorder_menus))
        .route("/publish", post(publish_menus))
        .route("/:id/visibility", put(set_visibility))
        .route("/:id/blocks", get(list_blocks))
}

/// Block editing routes.
pub fn block_routes() -> Router<AppState> {
    Router::new().route("/:id", put(update_block))
}

/// List the platform menu catalog
#[utoipa::path(
    get,
    path = "/admin/platform-menus",
    tag = "Menus",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The catalog"),
        (status = 403, description = "Super-admin only")
    )
)]
pub async fn list_platform_menus(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<PlatformMenu>>> {
    let menus = state.services.menus().list_platform_menus(&ctx).await?;
    Ok(Json(menus))
}

/// Add a menu to the catalog, instantiating it for every portfolio
#[utoipa::path(
    post,
    path = "/admin/platform-menus",
    tag = "Menus",
    security(("bearer_auth" = [])),
    request_body = CreatePlatformMenu,
    responses(
        (status = 201, description = "Menu created"),
        (status = 400, description = "Invalid key or component slots"),
        (status = 403, description = "Super-admin only"),
        (status = 409, description = "Key already taken")
    )
)]
pub async fn create_platform_menu(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreatePlatformMenu>,
) -> AppResult<Created<PlatformMenu>> {
    let menu = state
        .services
        .menus()
        .create_platform_menu(&ctx, payload)
        .await?;
    Ok(Created(menu))
}

/// Update a catalog menu; its key is immutable
#[utoipa::path(
    put,
    path = "/admin/platform-menus/{id}",
    tag = "Menus",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Platform menu id")),
    request_body = UpdatePlatformMenu,
    responses(
        (status = 200, description = "Menu updated"),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such menu")
    )
)]
pub async fn update_platform_menu(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePlatformMenu>,
) -> AppResult<Json<PlatformMenu>> {
    let menu = state
        .services
        .menus()
        .update_platform_menu(&ctx, id, payload)
        .await?;
    Ok(Json(menu))
}

/// Remove a catalog menu; refused while content references it
#[utoipa::path(
    delete,
    path = "/admin/platform-menus/{id}",
    tag = "Menus",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Platform menu id")),
    responses(
        (status = 204, description = "Menu deleted"),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such menu"),
        (status = 409, description = "Content still attached")
    )
)]
pub async fn delete_platform_menu(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.menus().delete_platform_menu(&ctx, id).await?;
    Ok(NoContent)
}

/// List the scoped portfolio's menus
#[utoipa::path(
    get,
    path = "/admin/menus",
    tag = "Menus",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The portfolio's menus", body = Vec<PortfolioMenuView>)
    )
)]
pub async fn list_menus(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<PortfolioMenuView>>> {
    let menus = state.services.menus().list_menus(&ctx).await?;
    Ok(Json(menus))
}

/// Toggle a menu's visibility on the portfolio
#[utoipa::path(
    put,
    path = "/admin/menus/{id}/visibility",
    tag = "Menus",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Portfolio menu id")),
    request_body = VisibilityRequest,
    responses(
        (status = 200, description = "Visibility updated"),
        (status = 403, description = "Not writable under this scope"),
        (status = 404, description = "No such menu"),
        (status = 409, description = "Menu cannot be shown")
    )
)]
pub async fn set_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<PortfolioMenu>> {
    let menu = state
        .services
        .menus()
        .set_visibility(&ctx, id, payload.visible)
        .await?;
    Ok(Json(menu))
}

/// Reorder the portfolio's menus
#[utoipa::path(
    put,
    path = "/admin/menus/reorder",
    tag = "Menus",
    security(("bearer_auth" = [])),
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Order updated"),
        (status = 400, description = "Ids do not match the portfolio's menus"),
        (status = 403, description = "Not writable under this scope")
    )
)]
pub async fn reorder_menus(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<Vec<PortfolioMenuView>>> {
    state.services.menus().reorder_menus(&ctx, payload.ids).await?;
    let menus = state.services.menus().list_menus(&ctx).await?;
    Ok(Json(menus))
}

/// Publish the draft menu configuration
#[utoipa::path(
    post,
    path = "/admin/menus/publish",
    tag = "Menus",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Snapshot updated", body = Vec<PortfolioMenuView>),
        (status = 403, description = "Not writable under this scope")
    )
)]
pub async fn publish_menus(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<PortfolioMenuView>>> {
    state.services.menus().publish_menus(&ctx).await?;
    let menus = state.services.menus().list_menus(&ctx).await?;
    Ok(Json(menus))
}

/// List a component menu's blocks
#[utoipa::path(
    get,
    path = "/admin/menus/{id}/blocks",
    tag = "Menus",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Portfolio menu id")),
    responses(
        (status = 200, description = "The menu's blocks", body = Vec<MenuBlock>),
        (status = 403, description = "Outside the current scope"),
        (status = 404, description = "No such menu")
    )
)]
pub async fn list_blocks(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<MenuBlock>>> {
    let blocks = state.services.menus().list_blocks(&ctx, id).await?;
    Ok(Json(blocks))
}

/// Replace a block's payload
#[utoipa::path(
    put,
    path = "/admin/blocks/{id}",
    tag = "Menus",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Block id")),
    request_body = BlockData,
    responses(
        (status = 200, description = "Block updated", body = MenuBlock),
        (status = 400, description = "Payload does not match the slot's component"),
        (status = 403, description = "Not writable under this scope"),
        (status = 404, description = "No such block")
    )
)]
pub async fn update_block(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlockData>,
) -> AppResult<Json<MenuBlock>> {
    let block = state.services.menus().update_block(&ctx, id, payload).await?;
    Ok(Json(block))
}
