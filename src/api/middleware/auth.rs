//! Admin authentication middleware.
//!
//! Resolves the full request context (actor plus effective scope) from
//! the Bearer token and the optional impersonation cookie, and injects
//! it into the request extensions for handlers to pick up.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, IMPERSONATION_COOKIE};
use crate::errors::AppError;

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let jar = CookieJar::from_headers(request.headers());
    let impersonation_token = jar.get(IMPERSONATION_COOKIE).map(|c| c.value().to_owned());

    let ctx = state
        .services
        .sessions()
        .resolve_context(token, impersonation_token)
        .await?;

    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}
