//! Public read path unit tests: page assembly from the published
//! snapshot.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use portfolio_platform::domain::content::{HeroContent, PersonInfo, Project};
use portfolio_platform::domain::{
    BlockData, MenuBlock, Portfolio, PortfolioMenuView, PortfolioStatus, SectionType,
};
use portfolio_platform::errors::AppError;
use portfolio_platform::infra::repositories::{
    MockContentRepository, MockMenuRepository, MockPortfolioRepository,
};
use portfolio_platform::services::{PublicService, PublicSite, SectionContent};

fn published_portfolio(id: Uuid, slug: &str) -> Portfolio {
    Portfolio {
        id,
        user_id: Uuid::new_v4(),
        slug: Some(slug.to_string()),
        status: PortfolioStatus::Published,
        rejection_reason: None,
        is_public: true,
        approved_at: Some(Utc::now()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn menu_view(
    portfolio_id: Uuid,
    key: &str,
    section_type: Option<SectionType>,
    published_order: i32,
) -> PortfolioMenuView {
    PortfolioMenuView {
        id: Uuid::new_v4(),
        portfolio_id,
        platform_menu_id: Uuid::new_v4(),
        key: key.to_string(),
        label: key.to_string(),
        section_type,
        component_keys: vec![],
        visible: true,
        order: published_order,
        published_visible: true,
        published_order,
        platform_enabled: true,
        renderable: true,
    }
}

fn project(portfolio_id: Uuid, platform_menu_id: Uuid, title: &str, visible: bool) -> Project {
    Project {
        id: Uuid::new_v4(),
        portfolio_id,
        platform_menu_id,
        title: title.to_string(),
        summary: None,
        repo_url: None,
        live_url: None,
        highlights: vec![],
        tags: vec![],
        order: 0,
        visible,
    }
}

fn site(
    portfolios: MockPortfolioRepository,
    menus: MockMenuRepository,
    content: MockContentRepository,
) -> PublicSite {
    PublicSite::new(Arc::new(portfolios), Arc::new(menus), Arc::new(content))
}

#[tokio::test]
async fn test_unknown_slug_not_found() {
    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_published_by_slug()
        .returning(|_| Ok(None));

    let service = site(
        portfolios,
        MockMenuRepository::new(),
        MockContentRepository::new(),
    );
    let err = service.get_portfolio("nobody").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_page_renders_published_sections_in_order() {
    let pid = Uuid::new_v4();
    let projects_menu = menu_view(pid, "projects", Some(SectionType::Projects), 0);
    let contact_menu = menu_view(pid, "contact", Some(SectionType::Contact), 1);
    let projects_catalog_id = projects_menu.platform_menu_id;

    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_published_by_slug()
        .withf(|slug| slug == "jane")
        .returning(move |slug| Ok(Some(published_portfolio(pid, slug))));

    let mut menus = MockMenuRepository::new();
    let published = vec![projects_menu, contact_menu];
    menus
        .expect_list_published_menus()
        .returning(move |_| Ok(published.clone()));

    let mut content = MockContentRepository::new();
    content.expect_find_person_info().returning(move |_| {
        Ok(Some(PersonInfo {
            id: Uuid::new_v4(),
            portfolio_id: pid,
            full_name: "Jane Doe".to_string(),
            headline: None,
            email: None,
            location: None,
            avatar_url: None,
            cv_url: None,
            visible: true,
        }))
    });
    content.expect_find_hero().returning(|_| Ok(None));
    content.expect_list_projects().returning(move |_| {
        Ok(vec![
            project(pid, projects_catalog_id, "Renderer", true),
            // Hidden items never reach the public page.
            project(pid, projects_catalog_id, "Abandoned", false),
            // Items attached to a different menu stay out of this section.
            project(pid, Uuid::new_v4(), "Elsewhere", true),
        ])
    });

    let service = site(portfolios, menus, content);
    let page = service.get_portfolio("jane").await.unwrap();

    assert_eq!(page.slug, "jane");
    assert_eq!(page.person.as_ref().unwrap().full_name, "Jane Doe");
    assert!(page.hero.is_none());
    assert_eq!(page.sections.len(), 2);
    assert_eq!(page.sections[0].key, "projects");
    assert_eq!(page.sections[1].key, "contact");

    match &page.sections[0].content {
        SectionContent::Projects { projects } => {
            assert_eq!(projects.len(), 1);
            assert_eq!(projects[0].title, "Renderer");
        }
        other => panic!("unexpected section content: {other:?}"),
    }
    match &page.sections[1].content {
        SectionContent::Contact { person } => {
            assert_eq!(person.as_ref().unwrap().full_name, "Jane Doe")
        }
        other => panic!("unexpected section content: {other:?}"),
    }
}

#[tokio::test]
async fn test_hidden_person_and_hero_are_withheld() {
    let pid = Uuid::new_v4();

    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_published_by_slug()
        .returning(move |slug| Ok(Some(published_portfolio(pid, slug))));

    let mut menus = MockMenuRepository::new();
    menus.expect_list_published_menus().returning(|_| Ok(vec![]));

    let mut content = MockContentRepository::new();
    content.expect_find_person_info().returning(move |_| {
        Ok(Some(PersonInfo {
            id: Uuid::new_v4(),
            portfolio_id: pid,
            full_name: "Jane Doe".to_string(),
            headline: None,
            email: None,
            location: None,
            avatar_url: None,
            cv_url: None,
            visible: false,
        }))
    });
    content.expect_find_hero().returning(move |_| {
        Ok(Some(HeroContent {
            id: Uuid::new_v4(),
            portfolio_id: pid,
            heading: "Hello".to_string(),
            subheading: None,
            cta_label: None,
            cta_url: None,
            visible: false,
        }))
    });

    let service = site(portfolios, menus, content);
    let page = service.get_portfolio("jane").await.unwrap();
    assert!(page.person.is_none());
    assert!(page.hero.is_none());
    assert!(page.sections.is_empty());
}

#[tokio::test]
async fn test_component_menu_renders_its_blocks() {
    let pid = Uuid::new_v4();
    let blocks_menu = menu_view(pid, "testimonials", None, 0);
    let instance_id = blocks_menu.id;

    let mut portfolios = MockPortfolioRepository::new();
    portfolios
        .expect_find_published_by_slug()
        .returning(move |slug| Ok(Some(published_portfolio(pid, slug))));

    let mut menus = MockMenuRepository::new();
    let published = vec![blocks_menu];
    menus
        .expect_list_published_menus()
        .returning(move |_| Ok(published.clone()));
    menus
        .expect_list_blocks()
        .withf(move |id| *id == instance_id)
        .returning(|id| {
            Ok(vec![MenuBlock {
                id: Uuid::new_v4(),
                portfolio_menu_id: id,
                component_key: "title".to_string(),
                order: 0,
                data: BlockData::Title {
                    text: "What clients say".to_string(),
                },
            }])
        });

    let mut content = MockContentRepository::new();
    content.expect_find_person_info().returning(|_| Ok(None));
    content.expect_find_hero().returning(|_| Ok(None));

    let service = site(portfolios, menus, content);
    let page = service.get_portfolio("jane").await.unwrap();

    assert_eq!(page.sections.len(), 1);
    match &page.sections[0].content {
        SectionContent::Blocks { blocks } => {
            assert_eq!(
                blocks[0],
                BlockData::Title {
                    text: "What clients say".to_string()
                }
            );
        }
        other => panic!("unexpected section content: {other:?}"),
    }
}
