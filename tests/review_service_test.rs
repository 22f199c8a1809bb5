//! Review workflow unit tests: submission, approval, rejection and the
//! slug lifecycle.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_platform::domain::{
    Actor, AdminScope, Portfolio, PortfolioStatus, RequestContext, UserRole,
};
use portfolio_platform::errors::AppError;
use portfolio_platform::infra::repositories::MockPortfolioRepository;
use portfolio_platform::infra::MockRevalidator;
use portfolio_platform::services::{ReviewService, Reviewer};

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

fn super_admin_ctx() -> RequestContext {
    RequestContext::new(
        Actor {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            role: UserRole::SuperAdmin,
            owned_portfolio_id: None,
        },
        AdminScope::platform(),
    )
}

fn impersonation_ctx(portfolio_id: Uuid) -> RequestContext {
    RequestContext::new(
        Actor {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            role: UserRole::SuperAdmin,
            owned_portfolio_id: None,
        },
        AdminScope::impersonating(portfolio_id),
    )
}

fn test_portfolio(id: Uuid, status: PortfolioStatus, slug: Option<&str>) -> Portfolio {
    Portfolio {
        id,
        user_id: Uuid::new_v4(),
        slug: slug.map(String::from),
        status,
        rejection_reason: None,
        is_public: status == PortfolioStatus::Published,
        approved_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn reviewer(portfolios: MockPortfolioRepository, revalidator: MockRevalidator) -> Reviewer {
    Reviewer::new(Arc::new(portfolios), Arc::new(revalidator))
}

#[tokio::test]
async fn test_submit_from_draft() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .with(eq(pid))
        .returning(move |id| Ok(Some(test_portfolio(id, PortfolioStatus::Draft, None))));
    portfolios
        .expect_submit_for_review()
        .with(eq(pid))
        .times(1)
        .returning(move |id| Ok(test_portfolio(id, PortfolioStatus::ReadyForReview, None)));

    let service = reviewer(portfolios, MockRevalidator::new());
    let result = service.submit(&owner_ctx(pid)).await.unwrap();
    assert_eq!(result.status, PortfolioStatus::ReadyForReview);
}

#[tokio::test]
async fn test_submit_after_rejection() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios.expect_find_by_id().returning(move |id| {
        let mut p = test_portfolio(id, PortfolioStatus::Rejected, Some("jane"));
        p.rejection_reason = Some("Too sparse".to_string());
        Ok(Some(p))
    });
    portfolios
        .expect_submit_for_review()
        .times(1)
        .returning(move |id| {
            let mut p = test_portfolio(id, PortfolioStatus::ReadyForReview, Some("jane"));
            // Resubmission keeps the reason; only approval clears it.
            p.rejection_reason = Some("Too sparse".to_string());
            Ok(p)
        });

    let service = reviewer(portfolios, MockRevalidator::new());
    let result = service.submit(&owner_ctx(pid)).await.unwrap();
    assert_eq!(result.status, PortfolioStatus::ReadyForReview);
    assert_eq!(result.rejection_reason.as_deref(), Some("Too sparse"));
}

#[tokio::test]
async fn test_submit_from_published_is_invalid() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_portfolio(id, PortfolioStatus::Published, Some("jane")))));

    let service = reviewer(portfolios, MockRevalidator::new());
    let err = service.submit(&owner_ctx(pid)).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[tokio::test]
async fn test_submit_under_impersonation_forbidden() {
    let pid = Uuid::new_v4();
    let service = reviewer(MockPortfolioRepository::new(), MockRevalidator::new());
    let err = service.submit(&impersonation_ctx(pid)).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_approve_requires_super_admin() {
    let pid = Uuid::new_v4();
    let service = reviewer(MockPortfolioRepository::new(), MockRevalidator::new());
    let err = service.approve(&owner_ctx(pid), pid).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_approve_requires_slug() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_portfolio(id, PortfolioStatus::ReadyForReview, None))));

    let service = reviewer(portfolios, MockRevalidator::new());
    let err = service.approve(&super_admin_ctx(), pid).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_approve_publishes_and_invalidates_cache() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios.expect_find_by_id().returning(move |id| {
        Ok(Some(test_portfolio(
            id,
            PortfolioStatus::ReadyForReview,
            Some("jane"),
        )))
    });
    portfolios
        .expect_approve()
        .times(1)
        .returning(move |id, approved_at| {
            let mut p = test_portfolio(id, PortfolioStatus::Published, Some("jane"));
            p.approved_at = Some(approved_at);
            Ok(p)
        });

    let mut revalidator = MockRevalidator::new();
    revalidator
        .expect_invalidate_portfolio()
        .withf(|slug| slug == "jane")
        .times(1)
        .returning(|_| Ok(()));

    let service = reviewer(portfolios, revalidator);
    let result = service.approve(&super_admin_ctx(), pid).await.unwrap();
    assert_eq!(result.status, PortfolioStatus::Published);
    assert!(result.approved_at.is_some());
}

#[tokio::test]
async fn test_approve_outside_review_is_invalid() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .returning(move |id| Ok(Some(test_portfolio(id, PortfolioStatus::Draft, Some("jane")))));

    let service = reviewer(portfolios, MockRevalidator::new());
    let err = service.approve(&super_admin_ctx(), pid).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[tokio::test]
async fn test_reject_requires_reason() {
    let pid = Uuid::new_v4();
    let service = reviewer(MockPortfolioRepository::new(), MockRevalidator::new());
    let err = service
        .reject(&super_admin_ctx(), pid, "   ".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_reject_records_reason() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios.expect_find_by_id().returning(move |id| {
        Ok(Some(test_portfolio(
            id,
            PortfolioStatus::ReadyForReview,
            Some("jane"),
        )))
    });
    portfolios
        .expect_reject()
        .withf(move |id, reason| *id == pid && reason == "Needs a project section")
        .times(1)
        .returning(move |id, reason| {
            let mut p = test_portfolio(id, PortfolioStatus::Rejected, Some("jane"));
            p.rejection_reason = Some(reason.to_string());
            Ok(p)
        });

    let service = reviewer(portfolios, MockRevalidator::new());
    let result = service
        .reject(&super_admin_ctx(), pid, "Needs a project section".to_string())
        .await
        .unwrap();
    assert_eq!(result.status, PortfolioStatus::Rejected);
    assert_eq!(
        result.rejection_reason.as_deref(),
        Some("Needs a project section")
    );
}

#[tokio::test]
async fn test_list_pending_requires_super_admin() {
    let pid = Uuid::new_v4();
    let service = reviewer(MockPortfolioRepository::new(), MockRevalidator::new());
    let err = service.list_pending(&owner_ctx(pid)).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_set_slug_rejects_bad_format() {
    let pid = Uuid::new_v4();
    let service = reviewer(MockPortfolioRepository::new(), MockRevalidator::new());
    let err = service
        .set_slug(&owner_ctx(pid), "Not A Slug".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_set_slug_conflict_with_other_portfolio() {
    let pid = Uuid::new_v4();
    let other = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_slug()
        .withf(|slug| slug == "jane")
        .returning(move |slug| {
            Ok(Some(test_portfolio(
                other,
                PortfolioStatus::Published,
                Some(slug),
            )))
        });

    let service = reviewer(portfolios, MockRevalidator::new());
    let err = service
        .set_slug(&owner_ctx(pid), "jane".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_set_slug_is_idempotent_for_own_portfolio() {
    let pid = Uuid::new_v4();
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_slug()
        .returning(move |slug| Ok(Some(test_portfolio(pid, PortfolioStatus::Draft, Some(slug)))));
    portfolios
        .expect_set_slug()
        .with(eq(pid), eq(Some("jane".to_string())))
        .times(1)
        .returning(move |id, slug| Ok(test_portfolio(id, PortfolioStatus::Draft, slug.as_deref())));

    let service = reviewer(portfolios, MockRevalidator::new());
    let result = service
        .set_slug(&owner_ctx(pid), "jane".to_string())
        .await
        .unwrap();
    assert_eq!(result.slug.as_deref(), Some("jane"));
}
