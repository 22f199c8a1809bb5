//! Content service unit tests: the ownership guard, scoped reads and
//! cache invalidation on writes.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_platform::domain::content::{
    CreateProject, Project, Skill, SkillGroup, UpdatePersonInfo, UpdateProject, UpdateSkill,
};
use portfolio_platform::domain::{
    Actor, AdminScope, PlatformMenu, Portfolio, PortfolioStatus, RequestContext, SectionType,
    UserRole,
};
use portfolio_platform::errors::AppError;
use portfolio_platform::infra::repositories::{
    MockContentRepository, MockMenuRepository, MockPortfolioRepository,
};
use portfolio_platform::infra::MockRevalidator;
use portfolio_platform::services::{ContentManager, ContentService};

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

fn test_project(id: Uuid, portfolio_id: Uuid) -> Project {
    Project {
        id,
        portfolio_id,
        platform_menu_id: Uuid::new_v4(),
        title: "Renderer".to_string(),
        summary: None,
        repo_url: None,
        live_url: None,
        highlights: vec![],
        tags: vec![],
        order: 0,
        visible: true,
    }
}

fn create_project_request(platform_menu_id: Uuid) -> CreateProject {
    CreateProject {
        platform_menu_id,
        title: "Renderer".to_string(),
        summary: Some("A software rasterizer".to_string()),
        repo_url: None,
        live_url: None,
        highlights: vec![],
        tags: vec!["rust".to_string()],
        order: None,
    }
}

struct Mocks {
    content: MockContentRepository,
    menus: MockMenuRepository,
    portfolios: MockPortfolioRepository,
    revalidator: MockRevalidator,
}

impl Mocks {
    fn new() -> Self {
        Self {
            content: MockContentRepository::new(),
            menus: MockMenuRepository::new(),
            portfolios: MockPortfolioRepository::new(),
            revalidator: MockRevalidator::new(),
        }
    }

    fn build(self) -> ContentManager {
        ContentManager::new(
            Arc::new(self.content),
            Arc::new(self.menus),
            Arc::new(self.portfolios),
            Arc::new(self.revalidator),
        )
    }
}

#[tokio::test]
async fn test_platform_scope_reads_come_back_empty() {
    let service = Mocks::new().build();
    let ctx = super_admin_ctx();

    assert!(service.list_projects(&ctx).await.unwrap().is_empty());
    assert!(service.list_skill_groups(&ctx).await.unwrap().is_empty());
    assert!(service.list_experiences(&ctx).await.unwrap().is_empty());
    assert!(service.get_person_info(&ctx).await.unwrap().is_none());
    assert!(service.get_hero(&ctx).await.unwrap().is_none());
}

#[tokio::test]
async fn test_impersonation_write_forbidden() {
    let pid = Uuid::new_v4();
    let service = Mocks::new().build();
    let err = service
        .create_project(&impersonation_ctx(pid), create_project_request(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_super_admin_cannot_write_content() {
    let service = Mocks::new().build();
    let err = service
        .create_project(&super_admin_ctx(), create_project_request(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_update_foreign_project_forbidden() {
    let pid = Uuid::new_v4();
    let foreign = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks
        .content
        .expect_find_project()
        .with(eq(project_id))
        .returning(move |id| Ok(Some(test_project(id, foreign))));

    let service = mocks.build();
    let err = service
        .update_project(
            &owner_ctx(pid),
            project_id,
            UpdateProject {
                title: Some("Hijacked".to_string()),
                summary: None,
                repo_url: None,
                live_url: None,
                highlights: None,
                tags: None,
                order: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_create_project_rejects_unknown_platform_menu() {
    let pid = Uuid::new_v4();
    let menu_id = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks
        .menus
        .expect_find_platform_menu()
        .with(eq(menu_id))
        .returning(|_| Ok(None));

    let service = mocks.build();
    let err = service
        .create_project(&owner_ctx(pid), create_project_request(menu_id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_create_project_invalidates_published_page() {
    let pid = Uuid::new_v4();
    let menu_id = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks.menus.expect_find_platform_menu().returning(|id| {
        Ok(Some(PlatformMenu {
            id,
            key: "projects".to_string(),
            label: "Projects".to_string(),
            section_type: Some(SectionType::Projects),
            component_keys: vec![],
            order: 0,
            enabled: true,
        }))
    });
    mocks
        .content
        .expect_list_projects()
        .with(eq(pid))
        .returning(|_| Ok(vec![]));
    mocks
        .content
        .expect_insert_project()
        .withf(move |p| p.portfolio_id == pid && p.visible && p.order == 0)
        .times(1)
        .returning(|p| Ok(p));
    mocks
        .portfolios
        .expect_find_by_id()
        .with(eq(pid))
        .returning(|id| Ok(Some(test_portfolio(id, PortfolioStatus::Published, Some("jane")))));
    mocks
        .revalidator
        .expect_invalidate_portfolio()
        .withf(|slug| slug == "jane")
        .times(1)
        .returning(|_| Ok(()));

    let service = mocks.build();
    let created = service
        .create_project(&owner_ctx(pid), create_project_request(menu_id))
        .await
        .unwrap();
    assert_eq!(created.title, "Renderer");
    assert!(created.visible);
}

#[tokio::test]
async fn test_draft_write_skips_invalidation() {
    let pid = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks
        .content
        .expect_find_project()
        .returning(move |id| Ok(Some(test_project(id, pid))));
    mocks
        .content
        .expect_update_project()
        .times(1)
        .returning(|p| Ok(p));
    mocks
        .portfolios
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_portfolio(id, PortfolioStatus::Draft, None))));
    // No expectation on the revalidator: an invalidation here fails the
    // test.

    let service = mocks.build();
    let updated = service
        .set_project_visibility(&owner_ctx(pid), project_id, false)
        .await
        .unwrap();
    assert!(!updated.visible);
}

#[tokio::test]
async fn test_create_project_rejects_oversized_title() {
    let pid = Uuid::new_v4();
    let mut request = create_project_request(Uuid::new_v4());
    request.title = "x".repeat(500);

    let service = Mocks::new().build();
    let err = service
        .create_project(&owner_ctx(pid), request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_skill_ownership_resolved_through_group() {
    let pid = Uuid::new_v4();
    let foreign = Uuid::new_v4();
    let group_id = Uuid::new_v4();
    let skill_id = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks.content.expect_find_skill().returning(move |id| {
        Ok(Some(Skill {
            id,
            skill_group_id: group_id,
            name: "Rust".to_string(),
            level: None,
            order: 0,
            visible: true,
        }))
    });
    mocks
        .content
        .expect_find_skill_group()
        .with(eq(group_id))
        .returning(move |id| {
            Ok(Some(SkillGroup {
                id,
                portfolio_id: foreign,
                platform_menu_id: Uuid::new_v4(),
                title: "Languages".to_string(),
                order: 0,
                visible: true,
            }))
        });

    let service = mocks.build();
    let err = service
        .update_skill(
            &owner_ctx(pid),
            skill_id,
            UpdateSkill {
                name: Some("C".to_string()),
                level: None,
                order: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_first_person_info_save_requires_full_name() {
    let pid = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks
        .content
        .expect_find_person_info()
        .with(eq(pid))
        .returning(|_| Ok(None));

    let service = mocks.build();
    let err = service
        .save_person_info(
            &owner_ctx(pid),
            UpdatePersonInfo {
                full_name: None,
                headline: Some("Engineer".to_string()),
                email: None,
                location: None,
                avatar_url: None,
                cv_url: None,
            },
        )
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert!(msg.contains("full_name")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_first_person_info_save_creates_visible_row() {
    let pid = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks
        .content
        .expect_find_person_info()
        .returning(|_| Ok(None));
    mocks
        .content
        .expect_upsert_person_info()
        .withf(move |info| info.portfolio_id == pid && info.visible)
        .times(1)
        .returning(|info| Ok(info));
    mocks
        .portfolios
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_portfolio(id, PortfolioStatus::Draft, None))));

    let service = mocks.build();
    let saved = service
        .save_person_info(
            &owner_ctx(pid),
            UpdatePersonInfo {
                full_name: Some("Jane Doe".to_string()),
                headline: None,
                email: None,
                location: None,
                avatar_url: None,
                cv_url: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(saved.full_name, "Jane Doe");
    assert!(saved.visible);
}

#[tokio::test]
async fn test_delete_skill_group_guards_before_deleting() {
    let pid = Uuid::new_v4();
    let group_id = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks
        .content
        .expect_find_skill_group()
        .returning(move |id| {
            Ok(Some(SkillGroup {
                id,
                portfolio_id: pid,
                platform_menu_id: Uuid::new_v4(),
                title: "Languages".to_string(),
                order: 0,
                visible: true,
            }))
        });

    let service = mocks.build();
    let err = service
        .delete_skill_group(&impersonation_ctx(pid), group_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}
