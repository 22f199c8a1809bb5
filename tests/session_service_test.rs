//! Session resolution unit tests: scope derivation from tokens and the
//! impersonation lifecycle.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_platform::domain::{
    Actor, AdminScope, AdminUser, Portfolio, PortfolioStatus, RequestContext, UserRole,
};
use portfolio_platform::errors::AppError;
use portfolio_platform::infra::repositories::{MockPortfolioRepository, MockUserRepository};
use portfolio_platform::services::{
    Claims, ImpersonationClaims, MockAuthService, SessionManager, SessionService,
};

fn test_user(id: Uuid, role: UserRole) -> AdminUser {
    AdminUser {
        id,
        email: "user@example.com".to_string(),
        password_hash: "hash".to_string(),
        name: Some("Test User".to_string()),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_portfolio(id: Uuid, user_id: Uuid) -> Portfolio {
    Portfolio {
        id,
        user_id,
        slug: None,
        status: PortfolioStatus::Draft,
        rejection_reason: None,
        is_public: false,
        approved_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn claims_for(user_id: Uuid, role: UserRole) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: user_id,
        email: "user@example.com".to_string(),
        role: role.to_string(),
        exp: now + 3600,
        iat: now,
    }
}

fn impersonation_claims(admin_id: Uuid, portfolio_id: Uuid) -> ImpersonationClaims {
    let now = Utc::now().timestamp();
    ImpersonationClaims {
        sub: admin_id,
        portfolio_id,
        exp: now + 3600,
        iat: now,
    }
}

fn super_admin_ctx(user_id: Uuid) -> RequestContext {
    RequestContext::new(
        Actor {
            user_id,
            email: "admin@example.com".to_string(),
            role: UserRole::SuperAdmin,
            owned_portfolio_id: None,
        },
        AdminScope::platform(),
    )
}

fn manager(
    auth: MockAuthService,
    users: MockUserRepository,
    portfolios: MockPortfolioRepository,
) -> SessionManager {
    SessionManager::new(Arc::new(auth), Arc::new(users), Arc::new(portfolios))
}

#[tokio::test]
async fn test_owner_resolves_to_own_scope() {
    let uid = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_token()
        .returning(move |_| Ok(claims_for(uid, UserRole::User)));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(uid))
        .returning(move |id| Ok(Some(test_user(id, UserRole::User))));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_user()
        .with(eq(uid))
        .returning(move |user_id| Ok(Some(test_portfolio(pid, user_id))));

    let service = manager(auth, users, portfolios);
    let ctx = service.resolve_context("token", None).await.unwrap();
    assert_eq!(ctx.scope, AdminScope::own(pid));
    assert_eq!(ctx.actor.owned_portfolio_id, Some(pid));
}

#[tokio::test]
async fn test_deleted_user_is_unauthorized() {
    let uid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_token()
        .returning(move |_| Ok(claims_for(uid, UserRole::User)));
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let service = manager(auth, users, MockPortfolioRepository::new());
    let err = service.resolve_context("token", None).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn test_super_admin_defaults_to_platform_scope() {
    let uid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_token()
        .returning(move |_| Ok(claims_for(uid, UserRole::SuperAdmin)));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, UserRole::SuperAdmin))));

    let service = manager(auth, users, MockPortfolioRepository::new());
    let ctx = service.resolve_context("token", None).await.unwrap();
    assert_eq!(ctx.scope, AdminScope::platform());
}

#[tokio::test]
async fn test_impersonation_token_scopes_to_target() {
    let uid = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_token()
        .returning(move |_| Ok(claims_for(uid, UserRole::SuperAdmin)));
    auth.expect_verify_impersonation_token()
        .returning(move |_| Ok(impersonation_claims(uid, pid)));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, UserRole::SuperAdmin))));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .with(eq(pid))
        .returning(|id| Ok(Some(test_portfolio(id, Uuid::new_v4()))));

    let service = manager(auth, users, portfolios);
    let ctx = service
        .resolve_context("token", Some("imp-token".to_string()))
        .await
        .unwrap();
    assert_eq!(ctx.scope, AdminScope::impersonating(pid));
    assert!(ctx.scope.is_impersonating);
}

#[tokio::test]
async fn test_dangling_impersonation_degrades_to_platform() {
    let uid = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_token()
        .returning(move |_| Ok(claims_for(uid, UserRole::SuperAdmin)));
    auth.expect_verify_impersonation_token()
        .returning(move |_| Ok(impersonation_claims(uid, pid)));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, UserRole::SuperAdmin))));
    let mut portfolios = MockPortfolioRepository::new();
    // Portfolio deleted since the token was issued.
    portfolios.expect_find_by_id().returning(|_| Ok(None));

    let service = manager(auth, users, portfolios);
    let ctx = service
        .resolve_context("token", Some("imp-token".to_string()))
        .await
        .unwrap();
    assert_eq!(ctx.scope, AdminScope::platform());
}

#[tokio::test]
async fn test_foreign_impersonation_token_is_ignored() {
    let uid = Uuid::new_v4();
    let other_admin = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_token()
        .returning(move |_| Ok(claims_for(uid, UserRole::SuperAdmin)));
    // Token issued to a different admin; no portfolio lookup happens.
    auth.expect_verify_impersonation_token()
        .returning(move |_| Ok(impersonation_claims(other_admin, pid)));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, UserRole::SuperAdmin))));

    let service = manager(auth, users, MockPortfolioRepository::new());
    let ctx = service
        .resolve_context("token", Some("imp-token".to_string()))
        .await
        .unwrap();
    assert_eq!(ctx.scope, AdminScope::platform());
}

#[tokio::test]
async fn test_regular_user_impersonation_token_is_ignored() {
    let uid = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_verify_token()
        .returning(move |_| Ok(claims_for(uid, UserRole::User)));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_user(id, UserRole::User))));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_user()
        .returning(move |user_id| Ok(Some(test_portfolio(pid, user_id))));

    let service = manager(auth, users, portfolios);
    let ctx = service
        .resolve_context("token", Some("imp-token".to_string()))
        .await
        .unwrap();
    assert_eq!(ctx.scope, AdminScope::own(pid));
    assert!(!ctx.scope.is_impersonating);
}

#[tokio::test]
async fn test_start_impersonation_requires_super_admin() {
    let pid = Uuid::new_v4();
    let ctx = RequestContext::new(
        Actor {
            user_id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            role: UserRole::User,
            owned_portfolio_id: Some(pid),
        },
        AdminScope::own(pid),
    );

    let service = manager(
        MockAuthService::new(),
        MockUserRepository::new(),
        MockPortfolioRepository::new(),
    );
    let err = service.start_impersonation(&ctx, pid).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_start_impersonation_checks_target_exists() {
    let uid = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut portfolios = MockPortfolioRepository::new();
    portfolios.expect_find_by_id().returning(|_| Ok(None));

    let service = manager(MockAuthService::new(), MockUserRepository::new(), portfolios);
    let err = service
        .start_impersonation(&super_admin_ctx(uid), pid)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_start_impersonation_issues_bound_token() {
    let uid = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut auth = MockAuthService::new();
    auth.expect_issue_impersonation_token()
        .with(eq(uid), eq(pid))
        .times(1)
        .returning(|_, _| Ok("signed-token".to_string()));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_portfolio(id, Uuid::new_v4()))));

    let service = manager(auth, MockUserRepository::new(), portfolios);
    let token = service
        .start_impersonation(&super_admin_ctx(uid), pid)
        .await
        .unwrap();
    assert_eq!(token, "signed-token");
}
