//! Portfolio and review workflow handlers.

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
use crate::domain::{PortfolioResponse, RequestContext};
use crate::errors::AppResult;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlugRequest {
    /// Lowercase letters, digits and '-', at most 64 characters
    #[schema(example = "jane-doe")]
    pub slug: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectRequest {
    /// Shown to the owner until the next approval
    pub reason: String,
}

/// Owner-facing portfolio routes.
pub fn portfolio_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_portfolio))
        .route("/slug", put(set_slug))
        .route("/submit", post(submit))
}

/// Review queue routes (super-admin).
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/pending", get(list_pending))
        .route("/:id/approve", post(approve))
        .route("/:id/reject", post(reject))
}

/// The scoped portfolio, with status and any rejection reason
#[utoipa::path(
    get,
    path = "/admin/portfolio",
    tag = "Review",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The portfolio", body = PortfolioResponse),
        (status = 404, description = "No portfolio under this scope")
    )
)]
pub async fn get_portfolio(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<PortfolioResponse>> {
    let portfolio = state.services.review().get_portfolio(&ctx).await?;
    Ok(Json(portfolio))
}

/// Claim the portfolio's public slug
#[utoipa::path(
    put,
    path = "/admin/portfolio/slug",
    tag = "Review",
    security(("bearer_auth" = [])),
    request_body = SlugRequest,
    responses(
        (status = 200, description = "Slug set", body = PortfolioResponse),
        (status = 400, description = "Invalid slug"),
        (status = 403, description = "Not writable under this scope"),
        (status = 409, description = "Slug already taken")
    )
)]
pub async fn set_slug(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<SlugRequest>,
) -> AppResult<Json<PortfolioResponse>> {
    let portfolio = state.services.review().set_slug(&ctx, payload.slug).await?;
    Ok(Json(portfolio))
}

/// Submit the portfolio for review
#[utoipa::path(
    post,
    path = "/admin/portfolio/submit",
    tag = "Review",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Submitted", body = PortfolioResponse),
        (status = 403, description = "Not writable under this scope"),
        (status = 409, description = "Not submittable from the current status")
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<PortfolioResponse>> {
    let portfolio = state.services.review().submit(&ctx).await?;
    Ok(Json(portfolio))
}

/// The review queue, oldest submission first
#[utoipa::path(
    get,
    path = "/admin/review/pending",
    tag = "Review",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Portfolios awaiting review", body = Vec<PortfolioResponse>),
        (status = 403, description = "Super-admin only")
    )
)]
pub async fn list_pending(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<PortfolioResponse>>> {
    let pending = state.services.review().list_pending(&ctx).await?;
    Ok(Json(pending))
}

/// Approve a submission, publishing the portfolio
#[utoipa::path(
    post,
    path = "/admin/review/{id}/approve",
    tag = "Review",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "Published", body = PortfolioResponse),
        (status = 400, description = "The owner has not set a slug"),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such portfolio"),
        (status = 409, description = "Not awaiting review")
    )
)]
pub async fn approve(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PortfolioResponse>> {
    let portfolio = state.services.review().approve(&ctx, id).await?;
    Ok(Json(portfolio))
}

/// Reject a submission with a reason
#[utoipa::path(
    post,
    path = "/admin/review/{id}/reject",
    tag = "Review",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Portfolio id")),
    request_body = RejectRequest,
    responses(
        (status = 200, description = "Rejected", body = PortfolioResponse),
        (status = 400, description = "Reason missing or too long"),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such portfolio"),
        (status = 409, description = "Not awaiting review")
    )
)]
pub async fn reject(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RejectRequest>,
) -> AppResult<Json<PortfolioResponse>> {
    let portfolio = state
        .services
        .review()
        .reject(&ctx, id, payload.reason)
        .await?;
    Ok(Json(portfolio))
}
