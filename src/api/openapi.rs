//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, content_handler, impersonation_handler, menu_handler, public_handler,
    review_handler, user_handler,
};
use crate::domain::content::{
    AboutContent, ArchitectureContent, CreateAbout, CreateArchitecture, CreateExperience,
    CreatePillar, CreatePillarPoint, CreatePrinciple, CreateProject, CreateSkill,
    CreateSkillGroup, Experience, HeroContent, PersonInfo, Pillar, PillarPoint, Principle,
    Project, Skill, SkillGroup, UpdateAbout, UpdateArchitecture, UpdateExperience, UpdateHero,
    UpdatePersonInfo, UpdatePillar, UpdatePillarPoint, UpdatePrinciple, UpdateProject,
    UpdateSkill, UpdateSkillGroup,
};
use crate::domain::{
    BlockData, BlockLink, CreateUser, MenuBlock, PlatformMenu, PortfolioMenu, PortfolioMenuView,
    PortfolioResponse, PortfolioStatus, SectionType, UpdateUser, UserResponse, UserRole,
};
use crate::services::{
    CreatePlatformMenu, PublicAbout, PublicArchitecture, PublicPillar, PublicPortfolio,
    PublicSection, PublicSkillGroup, SectionContent, TokenResponse, UpdatePlatformMenu,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Platform",
        version = "0.1.0",
        description = "Multi-tenant portfolio CMS: menu configuration, content editing, review workflow and public pages",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        impersonation_handler::me,
        impersonation_handler::start_impersonation,
        impersonation_handler::stop_impersonation,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        menu_handler::list_platform_menus,
        menu_handler::create_platform_menu,
        menu_handler::update_platform_menu,
        menu_handler::delete_platform_menu,
        menu_handler::list_menus,
        menu_handler::set_visibility,
        menu_handler::reorder_menus,
        menu_handler::publish_menus,
        menu_handler::list_blocks,
        menu_handler::update_block,
        review_handler::get_portfolio,
        review_handler::set_slug,
        review_handler::submit,
        review_handler::list_pending,
        review_handler::approve,
        review_handler::reject,
        content_handler::list_skill_groups,
        content_handler::create_skill_group,
        content_handler::update_skill_group,
        content_handler::set_skill_group_visibility,
        content_handler::delete_skill_group,
        content_handler::list_skills,
        content_handler::create_skill,
        content_handler::update_skill,
        content_handler::set_skill_visibility,
        content_handler::delete_skill,
        content_handler::list_projects,
        content_handler::create_project,
        content_handler::update_project,
        content_handler::set_project_visibility,
        content_handler::delete_project,
        content_handler::list_experiences,
        content_handler::create_experience,
        content_handler::update_experience,
        content_handler::set_experience_visibility,
        content_handler::delete_experience,
        content_handler::list_about,
        content_handler::create_about,
        content_handler::update_about,
        content_handler::set_about_visibility,
        content_handler::delete_about,
        content_handler::list_principles,
        content_handler::create_principle,
        content_handler::update_principle,
        content_handler::set_principle_visibility,
        content_handler::delete_principle,
        content_handler::list_architecture,
        content_handler::create_architecture,
        content_handler::update_architecture,
        content_handler::set_architecture_visibility,
        content_handler::delete_architecture,
        content_handler::list_pillars,
        content_handler::create_pillar,
        content_handler::update_pillar,
        content_handler::set_pillar_visibility,
        content_handler::delete_pillar,
        content_handler::list_pillar_points,
        content_handler::create_pillar_point,
        content_handler::update_pillar_point,
        content_handler::set_pillar_point_visibility,
        content_handler::delete_pillar_point,
        content_handler::get_person_info,
        content_handler::save_person_info,
        content_handler::get_hero,
        content_handler::save_hero,
        public_handler::get_portfolio,
    ),
    components(
        schemas(
            UserRole,
            UserResponse,
            CreateUser,
            UpdateUser,
            TokenResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            impersonation_handler::SessionResponse,
            PortfolioStatus,
            PortfolioResponse,
            review_handler::SlugRequest,
            review_handler::RejectRequest,
            SectionType,
            PlatformMenu,
            PortfolioMenu,
            PortfolioMenuView,
            MenuBlock,
            BlockData,
            BlockLink,
            CreatePlatformMenu,
            UpdatePlatformMenu,
            menu_handler::VisibilityRequest,
            menu_handler::ReorderRequest,
            SkillGroup,
            Skill,
            CreateSkillGroup,
            UpdateSkillGroup,
            CreateSkill,
            UpdateSkill,
            Project,
            CreateProject,
            UpdateProject,
            Experience,
            CreateExperience,
            UpdateExperience,
            AboutContent,
            Principle,
            CreateAbout,
            UpdateAbout,
            CreatePrinciple,
            UpdatePrinciple,
            ArchitectureContent,
            Pillar,
            PillarPoint,
            CreateArchitecture,
            UpdateArchitecture,
            CreatePillar,
            UpdatePillar,
            CreatePillarPoint,
            UpdatePillarPoint,
            PersonInfo,
            HeroContent,
            UpdatePersonInfo,
            UpdateHero,
            content_handler::VisibilityRequest,
            PublicPortfolio,
            PublicSection,
            SectionContent,
            PublicSkillGroup,
            PublicAbout,
            PublicArchitecture,
            PublicPillar,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Session", description = "Session introspection and impersonation"),
        (name = "Users", description = "Account management (super-admin)"),
        (name = "Menus", description = "Platform catalog and per-portfolio menus"),
        (name = "Review", description = "Slug, submission and review workflow"),
        (name = "Content", description = "Portfolio content editing"),
        (name = "Public", description = "Published portfolio pages")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
