//! User management unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_platform::domain::{
    Actor, AdminScope, AdminUser, CreateUser, Portfolio, PortfolioStatus, RequestContext,
    UpdateUser, UserRole,
};
use portfolio_platform::errors::AppError;
use portfolio_platform::infra::repositories::{
    MockMenuRepository, MockPortfolioRepository, MockUserRepository,
};
use portfolio_platform::services::{UserManager, UserService};

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

fn owner_ctx(portfolio_id: Uuid) -> RequestContext {
    RequestContext::new(
        Actor {
            user_id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            role: UserRole::User,
            owned_portfolio_id: Some(portfolio_id),
        },
        AdminScope::own(portfolio_id),
    )
}

fn manager(
    users: MockUserRepository,
    portfolios: MockPortfolioRepository,
    menus: MockMenuRepository,
) -> UserManager {
    UserManager::new(Arc::new(users), Arc::new(portfolios), Arc::new(menus))
}

#[tokio::test]
async fn test_list_users_requires_super_admin() {
    let service = manager(
        MockUserRepository::new(),
        MockPortfolioRepository::new(),
        MockMenuRepository::new(),
    );
    let err = service
        .list_users(&owner_ctx(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_get_user_includes_portfolio_id() {
    let uid = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(uid))
        .returning(|id| Ok(Some(test_user(id, UserRole::User))));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_user()
        .with(eq(uid))
        .returning(move |user_id| Ok(Some(test_portfolio(pid, user_id))));

    let service = manager(users, portfolios, MockMenuRepository::new());
    let response = service
        .get_user(&super_admin_ctx(Uuid::new_v4()), uid)
        .await
        .unwrap();
    assert_eq!(response.id, uid);
    assert_eq!(response.portfolio_id, Some(pid));
}

#[tokio::test]
async fn test_get_missing_user() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let service = manager(users, MockPortfolioRepository::new(), MockMenuRepository::new());
    let err = service
        .get_user(&super_admin_ctx(Uuid::new_v4()), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_create_user_rejects_unknown_role() {
    let service = manager(
        MockUserRepository::new(),
        MockPortfolioRepository::new(),
        MockMenuRepository::new(),
    );
    let err = service
        .create_user(
            &super_admin_ctx(Uuid::new_v4()),
            CreateUser {
                email: "new@example.com".to_string(),
                password: "SecurePass123".to_string(),
                name: None,
                role: Some("overlord".to_string()),
            },
        )
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert!(msg.contains("Unknown role")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_super_admin_gets_no_portfolio() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_create_with_portfolio()
        .withf(|user, portfolio, instances, blocks| {
            user.role == UserRole::SuperAdmin
                && portfolio.is_none()
                && instances.is_empty()
                && blocks.is_empty()
        })
        .times(1)
        .returning(|user, _, _, _| Ok(user));

    let service = manager(users, MockPortfolioRepository::new(), MockMenuRepository::new());
    let response = service
        .create_user(
            &super_admin_ctx(Uuid::new_v4()),
            CreateUser {
                email: "new-admin@example.com".to_string(),
                password: "SecurePass123".to_string(),
                name: None,
                role: Some("super_admin".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.role, "super_admin");
    assert!(response.portfolio_id.is_none());
}

#[tokio::test]
async fn test_update_user_rehashes_password() {
    let uid = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_user(id, UserRole::User))));
    users
        .expect_update()
        .withf(|user| user.password_hash != "hash" && user.password_hash.starts_with("$argon2"))
        .times(1)
        .returning(|user| Ok(user));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios.expect_find_by_user().returning(|_| Ok(None));

    let service = manager(users, portfolios, MockMenuRepository::new());
    let result = service
        .update_user(
            &super_admin_ctx(Uuid::new_v4()),
            uid,
            UpdateUser {
                name: None,
                password: Some("NewSecurePass1".to_string()),
                role: None,
            },
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_own_account_refused() {
    let uid = Uuid::new_v4();
    let service = manager(
        MockUserRepository::new(),
        MockPortfolioRepository::new(),
        MockMenuRepository::new(),
    );
    let err = service
        .delete_user(&super_admin_ctx(uid), uid)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_delete_other_user() {
    let target = Uuid::new_v4();
    let mut users = MockUserRepository::new();
    users
        .expect_delete()
        .with(eq(target))
        .times(1)
        .returning(|_| Ok(()));

    let service = manager(users, MockPortfolioRepository::new(), MockMenuRepository::new());
    let result = service
        .delete_user(&super_admin_ctx(Uuid::new_v4()), target)
        .await;
    assert!(result.is_ok());
}
