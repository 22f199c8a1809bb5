//! User management handlers (super-admin surface).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{CreateUser, RequestContext, UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all accounts
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All accounts", body = Vec<UserResponse>),
        (status = 403, description = "Super-admin only")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users().list_users(&ctx).await?;
    Ok(Json(users))
}

/// Fetch one account
#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The account", body = UserResponse),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users().get_user(&ctx, id).await?;
    Ok(Json(user))
}

/// Create an account, provisioning a portfolio for regular users
#[utoipa::path(
    post,
    path = "/admin/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Super-admin only"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreateUser>,
) -> AppResult<Created<UserResponse>> {
    let user = state.services.users().create_user(&ctx, payload).await?;
    Ok(Created(user))
}

/// Update an account's name, password or role
#[utoipa::path(
    put,
    path = "/admin/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Account updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users().update_user(&ctx, id, payload).await?;
    Ok(Json(user))
}

/// Delete an account and, by cascade, its portfolio and content
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Cannot delete own account"),
        (status = 403, description = "Super-admin only"),
        (status = 404, description = "No such user")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.users().delete_user(&ctx, id).await?;
    Ok(NoContent)
}
