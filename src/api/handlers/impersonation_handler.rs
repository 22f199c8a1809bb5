//! Session introspection and impersonation handlers.
//!
//! Impersonation rides in a signed httpOnly cookie scoped to the admin
//! surface; starting sets it, stopping clears it. The resolved scope is
//! surfaced on `/admin/me` so the dashboard can show who it is acting
//! as.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post},
    Extension, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::config::{IMPERSONATION_COOKIE, IMPERSONATION_COOKIE_PATH};
use crate::domain::RequestContext;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// The resolved session: actor identity plus effective scope.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
    /// The portfolio the session acts on, if any
    pub portfolio_id: Option<Uuid>,
    pub is_impersonating: bool,
}

impl From<&RequestContext> for SessionResponse {
    fn from(ctx: &RequestContext) -> Self {
        Self {
            user_id: ctx.actor.user_id,
            email: ctx.actor.email.clone(),
            role: ctx.actor.role.to_string(),
            portfolio_id: ctx.scope.portfolio_id,
            is_impersonating: ctx.scope.is_impersonating,
        }
    }
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/impersonation/:portfolio_id", post(start_impersonation))
        .route("/impersonation", delete(stop_impersonation))
}

/// The current session and its effective scope
#[utoipa::path(
    get,
    path = "/admin/me",
    tag = "Session",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The resolved session", body = SessionResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn me(Extension(ctx): Extension<RequestContext>) -> Json<SessionResponse> {
    Json(SessionResponse::from(&ctx))
}

/// Start impersonating a portfolio (super-admin, read-only)
#[utoipa::path(
    post,
    path = "/admin/impersonation/{portfolio_id}",
    tag = "Session",
    security(("bearer_auth" = [])),
    params(("portfolio_id" = Uuid, Path, description = "Portfolio to view")),
    responses(
        (status = 200, description = "Impersonation cookie set", body = MessageResponse),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such portfolio")
    )
)]
pub async fn start_impersonation(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    jar: CookieJar,
    Path(portfolio_id): Path<Uuid>,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let token = state
        .services
        .sessions()
        .start_impersonation(&ctx, portfolio_id)
        .await?;

    let cookie = Cookie::build((IMPERSONATION_COOKIE, token))
        .path(IMPERSONATION_COOKIE_PATH)
        .http_only(true)
        .build();

    Ok((
        jar.add(cookie),
        Json(MessageResponse::new("Impersonation started")),
    ))
}

/// Stop impersonating and return to the platform scope
#[utoipa::path(
    delete,
    path = "/admin/impersonation",
    tag = "Session",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Impersonation cookie cleared", body = MessageResponse)
    )
)]
pub async fn stop_impersonation(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let removal = Cookie::build((IMPERSONATION_COOKIE, ""))
        .path(IMPERSONATION_COOKIE_PATH)
        .http_only(true)
        .build();

    (
        jar.remove(removal),
        Json(MessageResponse::new("Impersonation stopped")),
    )
}
