//! Authentication unit tests: registration, login and token handling.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use portfolio_platform::config::Config;
use portfolio_platform::domain::{AdminUser, Password, PlatformMenu, UserRole};
use portfolio_platform::errors::AppError;
use portfolio_platform::infra::repositories::{MockMenuRepository, MockUserRepository};
use portfolio_platform::services::{AuthService, Authenticator};

fn test_user(id: Uuid, email: &str, password: &str) -> AdminUser {
    AdminUser {
        id,
        email: email.to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        name: Some("Test User".to_string()),
        role: UserRole::User,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn authenticator(users: MockUserRepository, menus: MockMenuRepository) -> Authenticator {
    Authenticator::new(Arc::new(users), Arc::new(menus), Config::for_tests())
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let service = authenticator(MockUserRepository::new(), MockMenuRepository::new());
    let err = service
        .register("new@example.com".to_string(), "short".to_string(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .withf(|email| email == "taken@example.com")
        .returning(|email| Ok(Some(test_user(Uuid::new_v4(), email, "SecurePass123"))));

    let service = authenticator(users, MockMenuRepository::new());
    let err = service
        .register(
            "taken@example.com".to_string(),
            "SecurePass123".to_string(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_register_provisions_portfolio_and_menus() {
    let catalog_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_create_with_portfolio()
        .withf(move |user, portfolio, instances, blocks| {
            let portfolio = portfolio.as_ref().expect("portfolio provisioned");
            // Disabled catalog menus get no instance; the surviving
            // instance takes the first per-portfolio order.
            user.role == UserRole::User
                && instances.len() == 1
                && instances[0].portfolio_id == portfolio.id
                && instances[0].platform_menu_id == catalog_id
                && instances[0].order == 0
                // New instances start hidden until the owner opts in.
                && !instances[0].visible
                && blocks.len() == 2
                && blocks[0].component_key == "title"
                && blocks[1].component_key == "rich_text"
        })
        .times(1)
        .returning(|user, _, _, _| Ok(user));

    let mut menus = MockMenuRepository::new();
    menus.expect_list_platform_menus().returning(move || {
        Ok(vec![
            PlatformMenu {
                id: Uuid::new_v4(),
                key: "retired".to_string(),
                label: "Retired".to_string(),
                section_type: None,
                component_keys: vec!["title".to_string()],
                order: 0,
                enabled: false,
            },
            PlatformMenu {
                id: catalog_id,
                key: "testimonials".to_string(),
                label: "Testimonials".to_string(),
                section_type: None,
                component_keys: vec!["title".to_string(), "rich_text".to_string()],
                order: 1,
                enabled: true,
            },
        ])
    });

    let service = authenticator(users, menus);
    let response = service
        .register(
            "new@example.com".to_string(),
            "SecurePass123".to_string(),
            Some("Jane".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(response.email, "new@example.com");
    assert_eq!(response.role, "user");
    assert!(response.portfolio_id.is_some());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));

    let service = authenticator(users, MockMenuRepository::new());
    let err = service
        .login("ghost@example.com".to_string(), "whatever123".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(|email| Ok(Some(test_user(Uuid::new_v4(), email, "CorrectPass123"))));

    let service = authenticator(users, MockMenuRepository::new());
    let err = service
        .login("user@example.com".to_string(), "WrongPass123".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let uid = Uuid::new_v4();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |email| Ok(Some(test_user(uid, email, "CorrectPass123"))));

    let service = authenticator(users, MockMenuRepository::new());
    let response = service
        .login("user@example.com".to_string(), "CorrectPass123".to_string())
        .await
        .unwrap();
    assert_eq!(response.token_type, "Bearer");
    assert!(response.expires_in > 0);

    let claims = service.verify_token(&response.access_token).unwrap();
    assert_eq!(claims.sub, uid);
    assert_eq!(claims.email, "user@example.com");
}

#[tokio::test]
async fn test_verify_token_rejects_garbage() {
    let service = authenticator(MockUserRepository::new(), MockMenuRepository::new());
    assert!(service.verify_token("not-a-jwt").is_err());
}

#[tokio::test]
async fn test_impersonation_token_round_trip() {
    let admin_id = Uuid::new_v4();
    let pid = Uuid::new_v4();

    let service = authenticator(MockUserRepository::new(), MockMenuRepository::new());
    let token = service.issue_impersonation_token(admin_id, pid).unwrap();
    let claims = service.verify_impersonation_token(&token).unwrap();
    assert_eq!(claims.sub, admin_id);
    assert_eq!(claims.portfolio_id, pid);

    // An access token is not a valid impersonation token.
    assert!(service.verify_impersonation_token("garbage").is_err());
}
