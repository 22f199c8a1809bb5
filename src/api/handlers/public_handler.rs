//! Public portfolio pages, no authentication.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::PublicPortfolio;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/:slug", get(get_portfolio))
}

/// A published portfolio page by slug
#[utoipa::path(
    get,
    path = "/p/{slug}",
    tag = "Public",
    params(("slug" = String, Path, description = "Portfolio slug")),
    responses(
        (status = 200, description = "The published page", body = PublicPortfolio),
        (status = 404, description = "No published portfolio under this slug")
    )
)]
pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PublicPortfolio>> {
    let page = state.services.public_site().get_portfolio(&slug).await?;
    Ok(Json(page))
}
