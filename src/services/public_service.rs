//! Public read path: assemble a published portfolio page by slug.
//!
//! Everything here renders from the published snapshot (menu columns
//! stamped at approval) and filters out hidden items. Unknown slugs and
//! unpublished portfolios are both a plain not-found; the public surface
//! never reveals review state.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::content::{
    AboutContent, ArchitectureContent, Experience, HeroContent, PersonInfo, Pillar, PillarPoint,
    Principle, Project, Skill, SkillGroup,
};
use crate::domain::{BlockData, PortfolioMenuView, SectionType};
use crate::errors::{AppResult, OptionExt};
use crate::infra::repositories::{ContentRepository, MenuRepository, PortfolioRepository};

/// A skill group with its visible skills, in display order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicSkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

/// An about section with its visible principles.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicAbout {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub principles: Vec<Principle>,
}

/// An architecture pillar with its visible points.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicPillar {
    pub title: String,
    pub points: Vec<PillarPoint>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicArchitecture {
    pub heading: String,
    pub summary: Option<String>,
    pub pillars: Vec<PublicPillar>,
}

/// Section payload, shaped by the menu's section type (or its component
/// blocks when it has no editor).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContent {
    Skills { groups: Vec<PublicSkillGroup> },
    Projects { projects: Vec<Project> },
    Experience { experiences: Vec<Experience> },
    About { entries: Vec<PublicAbout> },
    Architecture { entries: Vec<PublicArchitecture> },
    Contact { person: Option<PersonInfo> },
    Hero { hero: Option<HeroContent> },
    Blocks { blocks: Vec<BlockData> },
}

/// One renderable section of the public page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicSection {
    pub key: String,
    pub label: String,
    pub content: SectionContent,
}

/// The full public page for a published portfolio.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicPortfolio {
    pub slug: String,
    pub person: Option<PersonInfo>,
    pub hero: Option<HeroContent>,
    pub sections: Vec<PublicSection>,
}

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait PublicService: Send + Sync {
    /// The published page for `slug`, or NotFound when no published,
    /// publicly listed portfolio owns it.
    async fn get_portfolio(&self, slug: &str) -> AppResult<PublicPortfolio>;
}

pub struct PublicSite {
    portfolios: Arc<dyn PortfolioRepository>,
    menus: Arc<dyn MenuRepository>,
    content: Arc<dyn ContentRepository>,
}

impl PublicSite {
    pub fn new(
        portfolios: Arc<dyn PortfolioRepository>,
        menus: Arc<dyn MenuRepository>,
        content: Arc<dyn ContentRepository>,
    ) -> Self {
        Self {
            portfolios,
            menus,
            content,
        }
    }

    async fn skills_section(
        &self,
        portfolio_id: Uuid,
        platform_menu_id: Uuid,
    ) -> AppResult<SectionContent> {
        let groups = self.content.list_skill_groups(portfolio_id).await?;
        let mut out = Vec::new();
        for group in groups
            .into_iter()
            .filter(|g| g.visible && g.platform_menu_id == platform_menu_id)
        {
            let skills = self
                .content
                .list_skills(group.id)
                .await?
                .into_iter()
                .filter(|s| s.visible)
                .collect();
            out.push(PublicSkillGroup {
                title: group.title,
                skills,
            });
        }
        Ok(SectionContent::Skills { groups: out })
    }

    async fn about_section(
        &self,
        portfolio_id: Uuid,
        platform_menu_id: Uuid,
    ) -> AppResult<SectionContent> {
        let contents = self.content.list_about_contents(portfolio_id).await?;
        let mut entries = Vec::new();
        for about in contents
            .into_iter()
            .filter(|a| a.visible && a.platform_menu_id == platform_menu_id)
        {
            let principles = self
                .content
                .list_principles(about.id)
                .await?
                .into_iter()
                .filter(|p| p.visible)
                .collect();
            entries.push(Self::public_about(about, principles));
        }
        Ok(SectionContent::About { entries })
    }

    fn public_about(about: AboutContent, principles: Vec<Principle>) -> PublicAbout {
        PublicAbout {
            heading: about.heading,
            paragraphs: about.paragraphs,
            principles,
        }
    }

    async fn architecture_section(
        &self,
        portfolio_id: Uuid,
        platform_menu_id: Uuid,
    ) -> AppResult<SectionContent> {
        let contents = self.content.list_architecture_contents(portfolio_id).await?;
        let mut entries = Vec::new();
        for arch in contents
            .into_iter()
            .filter(|a| a.visible && a.platform_menu_id == platform_menu_id)
        {
            entries.push(self.public_architecture(arch).await?);
        }
        Ok(SectionContent::Architecture { entries })
    }

    async fn public_architecture(&self, arch: ArchitectureContent) -> AppResult<PublicArchitecture> {
        let pillars = self.content.list_pillars(arch.id).await?;
        let mut out = Vec::new();
        for pillar in pillars.into_iter().filter(|p| p.visible) {
            out.push(self.public_pillar(pillar).await?);
        }
        Ok(PublicArchitecture {
            heading: arch.heading,
            summary: arch.summary,
            pillars: out,
        })
    }

    async fn public_pillar(&self, pillar: Pillar) -> AppResult<PublicPillar> {
        let points = self
            .content
            .list_pillar_points(pillar.id)
            .await?
            .into_iter()
            .filter(|p| p.visible)
            .collect();
        Ok(PublicPillar {
            title: pillar.title,
            points,
        })
    }

    async fn blocks_section(&self, portfolio_menu_id: Uuid) -> AppResult<SectionContent> {
        let blocks = self
            .menus
            .list_blocks(portfolio_menu_id)
            .await?
            .into_iter()
            .map(|b| b.data)
            .collect();
        Ok(SectionContent::Blocks { blocks })
    }

    async fn section_for(
        &self,
        portfolio_id: Uuid,
        menu: &PortfolioMenuView,
        person: &Option<PersonInfo>,
        hero: &Option<HeroContent>,
    ) -> AppResult<SectionContent> {
        match menu.section_type {
            Some(SectionType::Skills) => {
                self.skills_section(portfolio_id, menu.platform_menu_id).await
            }
            Some(SectionType::Projects) => {
                let projects = self
                    .content
                    .list_projects(portfolio_id)
                    .await?
                    .into_iter()
                    .filter(|p| p.visible && p.platform_menu_id == menu.platform_menu_id)
                    .collect();
                Ok(SectionContent::Projects { projects })
            }
            Some(SectionType::Experience) => {
                let experiences = self
                    .content
                    .list_experiences(portfolio_id)
                    .await?
                    .into_iter()
                    .filter(|e| e.visible && e.platform_menu_id == menu.platform_menu_id)
                    .collect();
                Ok(SectionContent::Experience { experiences })
            }
            Some(SectionType::About) => {
                self.about_section(portfolio_id, menu.platform_menu_id).await
            }
            Some(SectionType::Architecture) => {
                self.architecture_section(portfolio_id, menu.platform_menu_id)
                    .await
            }
            Some(SectionType::Contact) => Ok(SectionContent::Contact {
                person: person.clone(),
            }),
            Some(SectionType::Hero) => Ok(SectionContent::Hero { hero: hero.clone() }),
            None => self.blocks_section(menu.id).await,
        }
    }
}

#[async_trait]
impl PublicService for PublicSite {
    async fn get_portfolio(&self, slug: &str) -> AppResult<PublicPortfolio> {
        let portfolio = self
            .portfolios
            .find_published_by_slug(slug)
            .await?
            .ok_or_not_found()?;

        let person = self
            .content
            .find_person_info(portfolio.id)
            .await?
            .filter(|p| p.visible);
        let hero = self
            .content
            .find_hero(portfolio.id)
            .await?
            .filter(|h| h.visible);

        // Published, enabled and renderable menus only, in published
        // order.
        let menus = self.menus.list_published_menus(portfolio.id).await?;

        let mut sections = Vec::with_capacity(menus.len());
        for menu in &menus {
            let content = self.section_for(portfolio.id, menu, &person, &hero).await?;
            sections.push(PublicSection {
                key: menu.key.clone(),
                label: menu.label.clone(),
                content,
            });
        }

        Ok(PublicPortfolio {
            slug: slug.to_owned(),
            person,
            hero,
            sections,
        })
    }
}
