//! Menu service unit tests: platform catalog rules and per-portfolio
//! menu editing.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_platform::domain::{
    Actor, AdminScope, BlockData, MenuBlock, PlatformMenu, Portfolio, PortfolioMenu,
    PortfolioMenuView, PortfolioStatus, RequestContext, SectionType, UserRole,
};
use portfolio_platform::errors::AppError;
use portfolio_platform::infra::repositories::{MockMenuRepository, MockPortfolioRepository};
use portfolio_platform::infra::MockRevalidator;
use portfolio_platform::services::{CreatePlatformMenu, MenuManager, MenuService};

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

fn platform_menu(id: Uuid, key: &str, enabled: bool) -> PlatformMenu {
    PlatformMenu {
        id,
        key: key.to_string(),
        label: key.to_string(),
        section_type: Some(SectionType::Skills),
        component_keys: vec![],
        order: 0,
        enabled,
    }
}

fn menu_instance(id: Uuid, portfolio_id: Uuid, platform_menu_id: Uuid) -> PortfolioMenu {
    PortfolioMenu {
        id,
        portfolio_id,
        platform_menu_id,
        visible: false,
        order: 0,
        published_visible: false,
        published_order: 0,
    }
}

fn menu_view(id: Uuid, portfolio_id: Uuid, key: &str, platform_enabled: bool) -> PortfolioMenuView {
    PortfolioMenuView {
        id,
        portfolio_id,
        platform_menu_id: Uuid::new_v4(),
        key: key.to_string(),
        label: key.to_string(),
        section_type: Some(SectionType::Skills),
        component_keys: vec![],
        visible: true,
        order: 0,
        published_visible: false,
        published_order: 0,
        platform_enabled,
        renderable: true,
    }
}

fn test_portfolio(id: Uuid, status: PortfolioStatus, slug: Option<&str>) -> Portfolio {
    Portfolio {
        id,
        user_id: Uuid::new_v4(),
        slug: slug.map(str::to_string),
        status,
        rejection_reason: None,
        is_public: status == PortfolioStatus::Published,
        approved_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn manager(menus: MockMenuRepository, revalidator: MockRevalidator) -> MenuManager {
    manager_with(menus, MockPortfolioRepository::new(), revalidator)
}

fn manager_with(
    menus: MockMenuRepository,
    portfolios: MockPortfolioRepository,
    revalidator: MockRevalidator,
) -> MenuManager {
    MenuManager::new(Arc::new(menus), Arc::new(portfolios), Arc::new(revalidator))
}

fn create_request(key: &str) -> CreatePlatformMenu {
    CreatePlatformMenu {
        key: key.to_string(),
        label: "Testimonials".to_string(),
        section_type: None,
        component_keys: vec!["title".to_string(), "rich_text".to_string()],
        order: None,
        enabled: None,
    }
}

#[tokio::test]
async fn test_create_platform_menu_requires_super_admin() {
    let pid = Uuid::new_v4();
    let service = manager(MockMenuRepository::new(), MockRevalidator::new());
    let err = service
        .create_platform_menu(&owner_ctx(pid), create_request("testimonials"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_create_platform_menu_rejects_bad_key() {
    let service = manager(MockMenuRepository::new(), MockRevalidator::new());
    let err = service
        .create_platform_menu(&super_admin_ctx(), create_request("Bad Key"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_create_menu_without_editor_needs_component_keys() {
    let service = manager(MockMenuRepository::new(), MockRevalidator::new());
    let mut request = create_request("testimonials");
    request.component_keys = vec![];
    let err = service
        .create_platform_menu(&super_admin_ctx(), request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_create_platform_menu_duplicate_key() {
    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_platform_menu_by_key()
        .withf(|key| key == "testimonials")
        .returning(|key| Ok(Some(platform_menu(Uuid::new_v4(), key, true))));

    let service = manager(menus, MockRevalidator::new());
    let err = service
        .create_platform_menu(&super_admin_ctx(), create_request("testimonials"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_create_platform_menu_appends_to_catalog_order() {
    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_platform_menu_by_key()
        .returning(|_| Ok(None));
    menus.expect_list_platform_menus().returning(|| {
        Ok(vec![
            platform_menu(Uuid::new_v4(), "skills", true),
            platform_menu(Uuid::new_v4(), "projects", true),
        ])
    });
    menus
        .expect_create_platform_menu()
        .withf(|menu| menu.order == 2 && menu.enabled && menu.key == "testimonials")
        .times(1)
        .returning(|menu| Ok(menu));

    let service = manager(menus, MockRevalidator::new());
    let created = service
        .create_platform_menu(&super_admin_ctx(), create_request("testimonials"))
        .await
        .unwrap();
    assert_eq!(created.order, 2);
    assert!(created.enabled);
}

#[tokio::test]
async fn test_create_platform_menu_can_start_disabled() {
    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_platform_menu_by_key()
        .returning(|_| Ok(None));
    menus.expect_list_platform_menus().returning(|| Ok(vec![]));
    menus
        .expect_create_platform_menu()
        .withf(|menu| !menu.enabled)
        .times(1)
        .returning(|menu| Ok(menu));

    let service = manager(menus, MockRevalidator::new());
    let mut request = create_request("testimonials");
    request.enabled = Some(false);
    let created = service
        .create_platform_menu(&super_admin_ctx(), request)
        .await
        .unwrap();
    assert!(!created.enabled);
}

#[tokio::test]
async fn test_catalog_update_invalidates_every_page() {
    let menu_id = Uuid::new_v4();
    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_platform_menu()
        .with(eq(menu_id))
        .returning(|id| Ok(Some(platform_menu(id, "skills", true))));
    menus
        .expect_update_platform_menu()
        .withf(|menu| !menu.enabled)
        .times(1)
        .returning(|menu| Ok(menu));

    let mut revalidator = MockRevalidator::new();
    revalidator
        .expect_invalidate_all()
        .times(1)
        .returning(|| Ok(()));

    let service = manager(menus, revalidator);
    let updated = service
        .update_platform_menu(
            &super_admin_ctx(),
            menu_id,
            portfolio_platform::services::UpdatePlatformMenu {
                label: None,
                section_type: None,
                component_keys: None,
                order: None,
                enabled: Some(false),
            },
        )
        .await
        .unwrap();
    assert!(!updated.enabled);
}

#[tokio::test]
async fn test_show_blocked_when_platform_menu_disabled() {
    let pid = Uuid::new_v4();
    let instance_id = Uuid::new_v4();
    let catalog_id = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_portfolio_menu()
        .with(eq(instance_id))
        .returning(move |id| Ok(Some(menu_instance(id, pid, catalog_id))));
    menus
        .expect_find_platform_menu()
        .with(eq(catalog_id))
        .returning(|id| Ok(Some(platform_menu(id, "skills", false))));

    let service = manager(menus, MockRevalidator::new());
    let err = service
        .set_visibility(&owner_ctx(pid), instance_id, true)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_hide_skips_platform_check() {
    let pid = Uuid::new_v4();
    let instance_id = Uuid::new_v4();
    let catalog_id = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_portfolio_menu()
        .returning(move |id| Ok(Some(menu_instance(id, pid, catalog_id))));
    // Hiding a disabled menu is always allowed, so the catalog is never
    // consulted.
    menus
        .expect_set_visibility()
        .with(eq(instance_id), eq(false))
        .times(1)
        .returning(move |id, _| Ok(menu_instance(id, pid, catalog_id)));

    let service = manager(menus, MockRevalidator::new());
    let result = service
        .set_visibility(&owner_ctx(pid), instance_id, false)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_visibility_foreign_portfolio_forbidden() {
    let pid = Uuid::new_v4();
    let foreign = Uuid::new_v4();
    let instance_id = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_portfolio_menu()
        .returning(move |id| Ok(Some(menu_instance(id, foreign, Uuid::new_v4()))));

    let service = manager(menus, MockRevalidator::new());
    let err = service
        .set_visibility(&owner_ctx(pid), instance_id, true)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_list_menus_platform_scope_is_empty() {
    let service = manager(MockMenuRepository::new(), MockRevalidator::new());
    let menus = service.list_menus(&super_admin_ctx()).await.unwrap();
    assert!(menus.is_empty());
}

#[tokio::test]
async fn test_reorder_forbidden_under_impersonation() {
    let pid = Uuid::new_v4();
    let service = manager(MockMenuRepository::new(), MockRevalidator::new());
    let err = service
        .reorder_menus(&impersonation_ctx(pid), vec![Uuid::new_v4()])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_reorder_rejects_disabled_menu_in_batch() {
    let pid = Uuid::new_v4();
    let good = Uuid::new_v4();
    let bad = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    let views = vec![
        menu_view(good, pid, "skills", true),
        menu_view(bad, pid, "projects", false),
    ];
    // The batch never reaches the store when one id fails the check.
    menus
        .expect_list_portfolio_menus()
        .with(eq(pid))
        .returning(move |_| Ok(views.clone()));

    let service = manager(menus, MockRevalidator::new());
    let err = service
        .reorder_menus(&owner_ctx(pid), vec![bad, good])
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert!(msg.contains("'projects'")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_reorder_persists_order_for_renderable_menus() {
    let pid = Uuid::new_v4();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    let views = vec![
        menu_view(first, pid, "skills", true),
        menu_view(second, pid, "projects", true),
    ];
    menus
        .expect_list_portfolio_menus()
        .returning(move |_| Ok(views.clone()));
    menus
        .expect_reorder_portfolio_menus()
        .with(eq(pid), eq(vec![second, first]))
        .times(1)
        .returning(|_, _| Ok(()));

    let service = manager(menus, MockRevalidator::new());
    let result = service
        .reorder_menus(&owner_ctx(pid), vec![second, first])
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_publish_menus_forbidden_under_impersonation() {
    let pid = Uuid::new_v4();
    let service = manager(MockMenuRepository::new(), MockRevalidator::new());
    let err = service
        .publish_menus(&impersonation_ctx(pid))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_publish_menus_on_draft_skips_invalidation() {
    let pid = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus
        .expect_publish_portfolio_menus()
        .with(eq(pid))
        .times(1)
        .returning(|_| Ok(()));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_portfolio(id, PortfolioStatus::Draft, None))));

    // No revalidator expectation: a draft portfolio has no cached page.
    let service = manager_with(menus, portfolios, MockRevalidator::new());
    let result = service.publish_menus(&owner_ctx(pid)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_publish_menus_invalidates_published_page() {
    let pid = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus
        .expect_publish_portfolio_menus()
        .with(eq(pid))
        .times(1)
        .returning(|_| Ok(()));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios.expect_find_by_id().returning(|id| {
        Ok(Some(test_portfolio(
            id,
            PortfolioStatus::Published,
            Some("jane"),
        )))
    });
    let mut revalidator = MockRevalidator::new();
    revalidator
        .expect_invalidate_portfolio()
        .withf(|slug| slug == "jane")
        .times(1)
        .returning(|_| Ok(()));

    let service = manager_with(menus, portfolios, revalidator);
    let result = service.publish_menus(&owner_ctx(pid)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_publish_menus_is_idempotent() {
    let pid = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    // The snapshot copy is deterministic, so repeating the call is safe
    // and hits the store with identical arguments.
    menus
        .expect_publish_portfolio_menus()
        .with(eq(pid))
        .times(2)
        .returning(|_| Ok(()));
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_portfolio(id, PortfolioStatus::Draft, None))));

    let service = manager_with(menus, portfolios, MockRevalidator::new());
    service.publish_menus(&owner_ctx(pid)).await.unwrap();
    service.publish_menus(&owner_ctx(pid)).await.unwrap();
}

#[tokio::test]
async fn test_update_block_component_mismatch() {
    let pid = Uuid::new_v4();
    let block_id = Uuid::new_v4();
    let instance_id = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus.expect_find_block().returning(move |id| {
        Ok(Some(MenuBlock {
            id,
            portfolio_menu_id: instance_id,
            component_key: "title".to_string(),
            order: 0,
            data: BlockData::Title {
                text: String::new(),
            },
        }))
    });
    menus
        .expect_find_portfolio_menu()
        .returning(move |id| Ok(Some(menu_instance(id, pid, Uuid::new_v4()))));

    let service = manager(menus, MockRevalidator::new());
    let err = service
        .update_block(
            &owner_ctx(pid),
            block_id,
            BlockData::RichText {
                body: "hello".to_string(),
            },
        )
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert!(msg.contains("expects component 'title'")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_block_persists_matching_payload() {
    let pid = Uuid::new_v4();
    let block_id = Uuid::new_v4();
    let instance_id = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus.expect_find_block().returning(move |id| {
        Ok(Some(MenuBlock {
            id,
            portfolio_menu_id: instance_id,
            component_key: "cta".to_string(),
            order: 0,
            data: BlockData::Cta {
                label: String::new(),
                url: String::new(),
            },
        }))
    });
    menus
        .expect_find_portfolio_menu()
        .returning(move |id| Ok(Some(menu_instance(id, pid, Uuid::new_v4()))));
    menus
        .expect_update_block_data()
        .times(1)
        .returning(move |id, data| {
            Ok(MenuBlock {
                id,
                portfolio_menu_id: instance_id,
                component_key: "cta".to_string(),
                order: 0,
                data,
            })
        });

    let service = manager(menus, MockRevalidator::new());
    let updated = service
        .update_block(
            &owner_ctx(pid),
            block_id,
            BlockData::Cta {
                label: "Hire me".to_string(),
                url: "https://example.com".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.data.component_key(), "cta");
}

#[tokio::test]
async fn test_list_blocks_readable_under_impersonation() {
    let pid = Uuid::new_v4();
    let instance_id = Uuid::new_v4();

    let mut menus = MockMenuRepository::new();
    menus
        .expect_find_portfolio_menu()
        .returning(move |id| Ok(Some(menu_instance(id, pid, Uuid::new_v4()))));
    menus
        .expect_list_blocks()
        .with(eq(instance_id))
        .returning(|_| Ok(vec![]));

    let service = manager(menus, MockRevalidator::new());
    let result = service
        .list_blocks(&impersonation_ctx(pid), instance_id)
        .await;
    assert!(result.is_ok());
}
