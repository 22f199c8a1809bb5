//! Content service: CRUD for every per-portfolio content family, under
//! the ownership guard.
//!
//! Reads follow the resolved scope: the platform scope (super-admin
//! without impersonation) sees empty collections rather than an error.
//! Writes always re-resolve the owning portfolio from storage, through
//! parent hops where needed, before the guard runs; the client never
//! names a portfolio directly.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::content::{
    AboutContent, ArchitectureContent, CreateAbout, CreateArchitecture, CreateExperience,
    CreatePillar, CreatePillarPoint, CreatePrinciple, CreateProject, CreateSkill,
    CreateSkillGroup, Experience, HeroContent, PersonInfo, Pillar, PillarPoint, Principle,
    Project, Skill, SkillGroup, UpdateAbout, UpdateArchitecture, UpdateExperience, UpdateHero,
    UpdatePersonInfo, UpdatePillar, UpdatePillarPoint, UpdatePrinciple, UpdateProject,
    UpdateSkill, UpdateSkillGroup,
};
use crate::domain::content::profile::validate_full_name;
use crate::domain::{assert_writable, PortfolioStatus, RequestContext};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::{ContentRepository, MenuRepository, PortfolioRepository};
use crate::infra::Revalidator;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ContentService: Send + Sync {
    // Skills

    async fn list_skill_groups(&self, ctx: &RequestContext) -> AppResult<Vec<SkillGroup>>;
    async fn create_skill_group(
        &self,
        ctx: &RequestContext,
        data: CreateSkillGroup,
    ) -> AppResult<SkillGroup>;
    async fn update_skill_group(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateSkillGroup,
    ) -> AppResult<SkillGroup>;
    async fn set_skill_group_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<SkillGroup>;
    async fn delete_skill_group(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    async fn list_skills(&self, ctx: &RequestContext, group_id: Uuid) -> AppResult<Vec<Skill>>;
    async fn create_skill(&self, ctx: &RequestContext, data: CreateSkill) -> AppResult<Skill>;
    async fn update_skill(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateSkill,
    ) -> AppResult<Skill>;
    async fn set_skill_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Skill>;
    async fn delete_skill(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    // Projects

    async fn list_projects(&self, ctx: &RequestContext) -> AppResult<Vec<Project>>;
    async fn create_project(&self, ctx: &RequestContext, data: CreateProject)
        -> AppResult<Project>;
    async fn update_project(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateProject,
    ) -> AppResult<Project>;
    async fn set_project_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Project>;
    async fn delete_project(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    // Experience

    async fn list_experiences(&self, ctx: &RequestContext) -> AppResult<Vec<Experience>>;
    async fn create_experience(
        &self,
        ctx: &RequestContext,
        data: CreateExperience,
    ) -> AppResult<Experience>;
    async fn update_experience(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateExperience,
    ) -> AppResult<Experience>;
    async fn set_experience_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Experience>;
    async fn delete_experience(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    // About

    async fn list_about_contents(&self, ctx: &RequestContext) -> AppResult<Vec<AboutContent>>;
    async fn create_about(&self, ctx: &RequestContext, data: CreateAbout)
        -> AppResult<AboutContent>;
    async fn update_about(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateAbout,
    ) -> AppResult<AboutContent>;
    async fn set_about_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<AboutContent>;
    async fn delete_about(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    async fn list_principles(
        &self,
        ctx: &RequestContext,
        about_content_id: Uuid,
    ) -> AppResult<Vec<Principle>>;
    async fn create_principle(
        &self,
        ctx: &RequestContext,
        data: CreatePrinciple,
    ) -> AppResult<Principle>;
    async fn update_principle(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePrinciple,
    ) -> AppResult<Principle>;
    async fn set_principle_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Principle>;
    async fn delete_principle(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    // Architecture

    async fn list_architecture_contents(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<Vec<ArchitectureContent>>;
    async fn create_architecture(
        &self,
        ctx: &RequestContext,
        data: CreateArchitecture,
    ) -> AppResult<ArchitectureContent>;
    async fn update_architecture(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateArchitecture,
    ) -> AppResult<ArchitectureContent>;
    async fn set_architecture_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<ArchitectureContent>;
    async fn delete_architecture(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    async fn list_pillars(
        &self,
        ctx: &RequestContext,
        architecture_content_id: Uuid,
    ) -> AppResult<Vec<Pillar>>;
    async fn create_pillar(&self, ctx: &RequestContext, data: CreatePillar) -> AppResult<Pillar>;
    async fn update_pillar(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePillar,
    ) -> AppResult<Pillar>;
    async fn set_pillar_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Pillar>;
    async fn delete_pillar(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    async fn list_pillar_points(
        &self,
        ctx: &RequestContext,
        pillar_id: Uuid,
    ) -> AppResult<Vec<PillarPoint>>;
    async fn create_pillar_point(
        &self,
        ctx: &RequestContext,
        data: CreatePillarPoint,
    ) -> AppResult<PillarPoint>;
    async fn update_pillar_point(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePillarPoint,
    ) -> AppResult<PillarPoint>;
    async fn set_pillar_point_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<PillarPoint>;
    async fn delete_pillar_point(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    // Profile

    async fn get_person_info(&self, ctx: &RequestContext) -> AppResult<Option<PersonInfo>>;
    async fn save_person_info(
        &self,
        ctx: &RequestContext,
        data: UpdatePersonInfo,
    ) -> AppResult<PersonInfo>;

    async fn get_hero(&self, ctx: &RequestContext) -> AppResult<Option<HeroContent>>;
    async fn save_hero(&self, ctx: &RequestContext, data: UpdateHero) -> AppResult<HeroContent>;
}

pub struct ContentManager {
    content: Arc<dyn ContentRepository>,
    menus: Arc<dyn MenuRepository>,
    portfolios: Arc<dyn PortfolioRepository>,
    revalidator: Arc<dyn Revalidator>,
}

impl ContentManager {
    pub fn new(
        content: Arc<dyn ContentRepository>,
        menus: Arc<dyn MenuRepository>,
        portfolios: Arc<dyn PortfolioRepository>,
        revalidator: Arc<dyn Revalidator>,
    ) -> Self {
        Self {
            content,
            menus,
            portfolios,
            revalidator,
        }
    }

    /// Resolve the portfolio a write must target. The platform scope has
    /// none; the guard then refuses impersonated and foreign writes.
    fn write_scope(ctx: &RequestContext) -> AppResult<Uuid> {
        let portfolio_id = ctx.scope.portfolio_id.ok_or(AppError::Forbidden)?;
        assert_writable(ctx, portfolio_id)?;
        Ok(portfolio_id)
    }

    fn assert_readable(ctx: &RequestContext, portfolio_id: Uuid) -> AppResult<()> {
        if ctx.scope.portfolio_id == Some(portfolio_id) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }

    async fn check_platform_menu(&self, id: Uuid) -> AppResult<()> {
        self.menus.find_platform_menu(id).await?.ok_or_not_found()?;
        Ok(())
    }

    /// Published pages render content live, so a write to a published
    /// portfolio must drop its cached renders.
    async fn revalidate(&self, portfolio_id: Uuid) -> AppResult<()> {
        if let Some(portfolio) = self.portfolios.find_by_id(portfolio_id).await? {
            if portfolio.status == PortfolioStatus::Published {
                if let Some(slug) = &portfolio.slug {
                    self.revalidator.invalidate_portfolio(slug).await?;
                }
            }
        }
        Ok(())
    }

    // Parent-hop resolution

    async fn group_owner(&self, group_id: Uuid) -> AppResult<(SkillGroup, Uuid)> {
        let group = self
            .content
            .find_skill_group(group_id)
            .await?
            .ok_or_not_found()?;
        let portfolio_id = group.portfolio_id;
        Ok((group, portfolio_id))
    }

    async fn skill_owner(&self, skill_id: Uuid) -> AppResult<(Skill, Uuid)> {
        let skill = self.content.find_skill(skill_id).await?.ok_or_not_found()?;
        let (_, portfolio_id) = self.group_owner(skill.skill_group_id).await?;
        Ok((skill, portfolio_id))
    }

    async fn about_owner(&self, id: Uuid) -> AppResult<(AboutContent, Uuid)> {
        let about = self
            .content
            .find_about_content(id)
            .await?
            .ok_or_not_found()?;
        let portfolio_id = about.portfolio_id;
        Ok((about, portfolio_id))
    }

    async fn principle_owner(&self, id: Uuid) -> AppResult<(Principle, Uuid)> {
        let principle = self.content.find_principle(id).await?.ok_or_not_found()?;
        let (_, portfolio_id) = self.about_owner(principle.about_content_id).await?;
        Ok((principle, portfolio_id))
    }

    async fn architecture_owner(&self, id: Uuid) -> AppResult<(ArchitectureContent, Uuid)> {
        let content = self
            .content
            .find_architecture_content(id)
            .await?
            .ok_or_not_found()?;
        let portfolio_id = content.portfolio_id;
        Ok((content, portfolio_id))
    }

    async fn pillar_owner(&self, id: Uuid) -> AppResult<(Pillar, Uuid)> {
        let pillar = self.content.find_pillar(id).await?.ok_or_not_found()?;
        let (_, portfolio_id) = self
            .architecture_owner(pillar.architecture_content_id)
            .await?;
        Ok((pillar, portfolio_id))
    }

    async fn pillar_point_owner(&self, id: Uuid) -> AppResult<(PillarPoint, Uuid)> {
        let point = self.content.find_pillar_point(id).await?.ok_or_not_found()?;
        let (_, portfolio_id) = self.pillar_owner(point.pillar_id).await?;
        Ok((point, portfolio_id))
    }
}

#[async_trait]
impl ContentService for ContentManager {
    // Skills

    async fn list_skill_groups(&self, ctx: &RequestContext) -> AppResult<Vec<SkillGroup>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.content.list_skill_groups(portfolio_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn create_skill_group(
        &self,
        ctx: &RequestContext,
        data: CreateSkillGroup,
    ) -> AppResult<SkillGroup> {
        let portfolio_id = Self::write_scope(ctx)?;
        data.validate()?;
        self.check_platform_menu(data.platform_menu_id).await?;

        let order = match data.order {
            Some(o) => o,
            None => self.content.list_skill_groups(portfolio_id).await?.len() as i32,
        };

        let created = self
            .content
            .insert_skill_group(SkillGroup {
                id: Uuid::new_v4(),
                portfolio_id,
                platform_menu_id: data.platform_menu_id,
                title: data.title,
                order,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_skill_group(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateSkillGroup,
    ) -> AppResult<SkillGroup> {
        let (mut group, portfolio_id) = self.group_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(title) = data.title {
            group.title = title;
        }
        if let Some(order) = data.order {
            group.order = order;
        }

        let updated = self.content.update_skill_group(group).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_skill_group_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<SkillGroup> {
        let (mut group, portfolio_id) = self.group_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        group.visible = visible;
        let updated = self.content.update_skill_group(group).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_skill_group(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let (_, portfolio_id) = self.group_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        self.content.delete_skill_group(id).await?;
        self.revalidate(portfolio_id).await
    }

    async fn list_skills(&self, ctx: &RequestContext, group_id: Uuid) -> AppResult<Vec<Skill>> {
        let (_, portfolio_id) = self.group_owner(group_id).await?;
        Self::assert_readable(ctx, portfolio_id)?;
        self.content.list_skills(group_id).await
    }

    async fn create_skill(&self, ctx: &RequestContext, data: CreateSkill) -> AppResult<Skill> {
        let (_, portfolio_id) = self.group_owner(data.skill_group_id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        let order = match data.order {
            Some(o) => o,
            None => self.content.list_skills(data.skill_group_id).await?.len() as i32,
        };

        let created = self
            .content
            .insert_skill(Skill {
                id: Uuid::new_v4(),
                skill_group_id: data.skill_group_id,
                name: data.name,
                level: data.level,
                order,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_skill(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateSkill,
    ) -> AppResult<Skill> {
        let (mut skill, portfolio_id) = self.skill_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(name) = data.name {
            skill.name = name;
        }
        if data.level.is_some() {
            skill.level = data.level;
        }
        if let Some(order) = data.order {
            skill.order = order;
        }

        let updated = self.content.update_skill(skill).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_skill_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Skill> {
        let (mut skill, portfolio_id) = self.skill_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        skill.visible = visible;
        let updated = self.content.update_skill(skill).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_skill(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let (_, portfolio_id) = self.skill_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        self.content.delete_skill(id).await?;
        self.revalidate(portfolio_id).await
    }

    // Projects

    async fn list_projects(&self, ctx: &RequestContext) -> AppResult<Vec<Project>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.content.list_projects(portfolio_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn create_project(
        &self,
        ctx: &RequestContext,
        data: CreateProject,
    ) -> AppResult<Project> {
        let portfolio_id = Self::write_scope(ctx)?;
        data.validate()?;
        self.check_platform_menu(data.platform_menu_id).await?;

        let order = match data.order {
            Some(o) => o,
            None => self.content.list_projects(portfolio_id).await?.len() as i32,
        };

        let created = self
            .content
            .insert_project(Project {
                id: Uuid::new_v4(),
                portfolio_id,
                platform_menu_id: data.platform_menu_id,
                title: data.title,
                summary: data.summary,
                repo_url: data.repo_url,
                live_url: data.live_url,
                highlights: data.highlights,
                tags: data.tags,
                order,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_project(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateProject,
    ) -> AppResult<Project> {
        let mut project = self.content.find_project(id).await?.ok_or_not_found()?;
        let portfolio_id = project.portfolio_id;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(title) = data.title {
            project.title = title;
        }
        if data.summary.is_some() {
            project.summary = data.summary;
        }
        if data.repo_url.is_some() {
            project.repo_url = data.repo_url;
        }
        if data.live_url.is_some() {
            project.live_url = data.live_url;
        }
        if let Some(highlights) = data.highlights {
            project.highlights = highlights;
        }
        if let Some(tags) = data.tags {
            project.tags = tags;
        }
        if let Some(order) = data.order {
            project.order = order;
        }

        let updated = self.content.update_project(project).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_project_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Project> {
        let mut project = self.content.find_project(id).await?.ok_or_not_found()?;
        let portfolio_id = project.portfolio_id;
        assert_writable(ctx, portfolio_id)?;
        project.visible = visible;
        let updated = self.content.update_project(project).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_project(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let project = self.content.find_project(id).await?.ok_or_not_found()?;
        assert_writable(ctx, project.portfolio_id)?;
        self.content.delete_project(id).await?;
        self.revalidate(project.portfolio_id).await
    }

    // Experience

    async fn list_experiences(&self, ctx: &RequestContext) -> AppResult<Vec<Experience>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.content.list_experiences(portfolio_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn create_experience(
        &self,
        ctx: &RequestContext,
        data: CreateExperience,
    ) -> AppResult<Experience> {
        let portfolio_id = Self::write_scope(ctx)?;
        data.validate()?;
        self.check_platform_menu(data.platform_menu_id).await?;

        let order = match data.order {
            Some(o) => o,
            None => self.content.list_experiences(portfolio_id).await?.len() as i32,
        };

        let created = self
            .content
            .insert_experience(Experience {
                id: Uuid::new_v4(),
                portfolio_id,
                platform_menu_id: data.platform_menu_id,
                company: data.company,
                position: data.position,
                summary: data.summary,
                start_date: data.start_date,
                end_date: data.end_date,
                highlights: data.highlights,
                order,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_experience(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateExperience,
    ) -> AppResult<Experience> {
        let mut exp = self.content.find_experience(id).await?.ok_or_not_found()?;
        let portfolio_id = exp.portfolio_id;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(company) = data.company {
            exp.company = company;
        }
        if let Some(position) = data.position {
            exp.position = position;
        }
        if data.summary.is_some() {
            exp.summary = data.summary;
        }
        if data.start_date.is_some() {
            exp.start_date = data.start_date;
        }
        if data.end_date.is_some() {
            exp.end_date = data.end_date;
        }
        if let Some(highlights) = data.highlights {
            exp.highlights = highlights;
        }
        if let Some(order) = data.order {
            exp.order = order;
        }

        let updated = self.content.update_experience(exp).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_experience_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Experience> {
        let mut exp = self.content.find_experience(id).await?.ok_or_not_found()?;
        let portfolio_id = exp.portfolio_id;
        assert_writable(ctx, portfolio_id)?;
        exp.visible = visible;
        let updated = self.content.update_experience(exp).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_experience(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let exp = self.content.find_experience(id).await?.ok_or_not_found()?;
        assert_writable(ctx, exp.portfolio_id)?;
        self.content.delete_experience(id).await?;
        self.revalidate(exp.portfolio_id).await
    }

    // About

    async fn list_about_contents(&self, ctx: &RequestContext) -> AppResult<Vec<AboutContent>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.content.list_about_contents(portfolio_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn create_about(
        &self,
        ctx: &RequestContext,
        data: CreateAbout,
    ) -> AppResult<AboutContent> {
        let portfolio_id = Self::write_scope(ctx)?;
        data.validate()?;
        self.check_platform_menu(data.platform_menu_id).await?;

        let created = self
            .content
            .insert_about_content(AboutContent {
                id: Uuid::new_v4(),
                portfolio_id,
                platform_menu_id: data.platform_menu_id,
                heading: data.heading,
                paragraphs: data.paragraphs,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_about(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateAbout,
    ) -> AppResult<AboutContent> {
        let (mut about, portfolio_id) = self.about_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(heading) = data.heading {
            about.heading = heading;
        }
        if let Some(paragraphs) = data.paragraphs {
            about.paragraphs = paragraphs;
        }

        let updated = self.content.update_about_content(about).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_about_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<AboutContent> {
        let (mut about, portfolio_id) = self.about_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        about.visible = visible;
        let updated = self.content.update_about_content(about).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_about(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let (_, portfolio_id) = self.about_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        self.content.delete_about_content(id).await?;
        self.revalidate(portfolio_id).await
    }

    async fn list_principles(
        &self,
        ctx: &RequestContext,
        about_content_id: Uuid,
    ) -> AppResult<Vec<Principle>> {
        let (_, portfolio_id) = self.about_owner(about_content_id).await?;
        Self::assert_readable(ctx, portfolio_id)?;
        self.content.list_principles(about_content_id).await
    }

    async fn create_principle(
        &self,
        ctx: &RequestContext,
        data: CreatePrinciple,
    ) -> AppResult<Principle> {
        let (_, portfolio_id) = self.about_owner(data.about_content_id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        let order = match data.order {
            Some(o) => o,
            None => {
                self.content
                    .list_principles(data.about_content_id)
                    .await?
                    .len() as i32
            }
        };

        let created = self
            .content
            .insert_principle(Principle {
                id: Uuid::new_v4(),
                about_content_id: data.about_content_id,
                title: data.title,
                body: data.body,
                order,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_principle(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePrinciple,
    ) -> AppResult<Principle> {
        let (mut principle, portfolio_id) = self.principle_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(title) = data.title {
            principle.title = title;
        }
        if let Some(body) = data.body {
            principle.body = body;
        }
        if let Some(order) = data.order {
            principle.order = order;
        }

        let updated = self.content.update_principle(principle).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_principle_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Principle> {
        let (mut principle, portfolio_id) = self.principle_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        principle.visible = visible;
        let updated = self.content.update_principle(principle).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_principle(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let (_, portfolio_id) = self.principle_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        self.content.delete_principle(id).await?;
        self.revalidate(portfolio_id).await
    }

    // Architecture

    async fn list_architecture_contents(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<Vec<ArchitectureContent>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.content.list_architecture_contents(portfolio_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn create_architecture(
        &self,
        ctx: &RequestContext,
        data: CreateArchitecture,
    ) -> AppResult<ArchitectureContent> {
        let portfolio_id = Self::write_scope(ctx)?;
        data.validate()?;
        self.check_platform_menu(data.platform_menu_id).await?;

        let created = self
            .content
            .insert_architecture_content(ArchitectureContent {
                id: Uuid::new_v4(),
                portfolio_id,
                platform_menu_id: data.platform_menu_id,
                heading: data.heading,
                summary: data.summary,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_architecture(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateArchitecture,
    ) -> AppResult<ArchitectureContent> {
        let (mut content, portfolio_id) = self.architecture_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(heading) = data.heading {
            content.heading = heading;
        }
        if data.summary.is_some() {
            content.summary = data.summary;
        }

        let updated = self.content.update_architecture_content(content).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_architecture_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<ArchitectureContent> {
        let (mut content, portfolio_id) = self.architecture_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        content.visible = visible;
        let updated = self.content.update_architecture_content(content).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_architecture(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let (_, portfolio_id) = self.architecture_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        self.content.delete_architecture_content(id).await?;
        self.revalidate(portfolio_id).await
    }

    async fn list_pillars(
        &self,
        ctx: &RequestContext,
        architecture_content_id: Uuid,
    ) -> AppResult<Vec<Pillar>> {
        let (_, portfolio_id) = self.architecture_owner(architecture_content_id).await?;
        Self::assert_readable(ctx, portfolio_id)?;
        self.content.list_pillars(architecture_content_id).await
    }

    async fn create_pillar(&self, ctx: &RequestContext, data: CreatePillar) -> AppResult<Pillar> {
        let (_, portfolio_id) = self.architecture_owner(data.architecture_content_id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        let order = match data.order {
            Some(o) => o,
            None => {
                self.content
                    .list_pillars(data.architecture_content_id)
                    .await?
                    .len() as i32
            }
        };

        let created = self
            .content
            .insert_pillar(Pillar {
                id: Uuid::new_v4(),
                architecture_content_id: data.architecture_content_id,
                title: data.title,
                order,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_pillar(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePillar,
    ) -> AppResult<Pillar> {
        let (mut pillar, portfolio_id) = self.pillar_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(title) = data.title {
            pillar.title = title;
        }
        if let Some(order) = data.order {
            pillar.order = order;
        }

        let updated = self.content.update_pillar(pillar).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_pillar_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<Pillar> {
        let (mut pillar, portfolio_id) = self.pillar_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        pillar.visible = visible;
        let updated = self.content.update_pillar(pillar).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_pillar(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let (_, portfolio_id) = self.pillar_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        self.content.delete_pillar(id).await?;
        self.revalidate(portfolio_id).await
    }

    async fn list_pillar_points(
        &self,
        ctx: &RequestContext,
        pillar_id: Uuid,
    ) -> AppResult<Vec<PillarPoint>> {
        let (_, portfolio_id) = self.pillar_owner(pillar_id).await?;
        Self::assert_readable(ctx, portfolio_id)?;
        self.content.list_pillar_points(pillar_id).await
    }

    async fn create_pillar_point(
        &self,
        ctx: &RequestContext,
        data: CreatePillarPoint,
    ) -> AppResult<PillarPoint> {
        let (_, portfolio_id) = self.pillar_owner(data.pillar_id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        let order = match data.order {
            Some(o) => o,
            None => self.content.list_pillar_points(data.pillar_id).await?.len() as i32,
        };

        let created = self
            .content
            .insert_pillar_point(PillarPoint {
                id: Uuid::new_v4(),
                pillar_id: data.pillar_id,
                text: data.text,
                order,
                visible: true,
            })
            .await?;
        self.revalidate(portfolio_id).await?;
        Ok(created)
    }

    async fn update_pillar_point(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePillarPoint,
    ) -> AppResult<PillarPoint> {
        let (mut point, portfolio_id) = self.pillar_point_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        data.validate()?;

        if let Some(text) = data.text {
            point.text = text;
        }
        if let Some(order) = data.order {
            point.order = order;
        }

        let updated = self.content.update_pillar_point(point).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn set_pillar_point_visibility(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        visible: bool,
    ) -> AppResult<PillarPoint> {
        let (mut point, portfolio_id) = self.pillar_point_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        point.visible = visible;
        let updated = self.content.update_pillar_point(point).await?;
        self.revalidate(portfolio_id).await?;
        Ok(updated)
    }

    async fn delete_pillar_point(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let (_, portfolio_id) = self.pillar_point_owner(id).await?;
        assert_writable(ctx, portfolio_id)?;
        self.content.delete_pillar_point(id).await?;
        self.revalidate(portfolio_id).await
    }

    // Profile

    async fn get_person_info(&self, ctx: &RequestContext) -> AppResult<Option<PersonInfo>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.content.find_person_info(portfolio_id).await,
            None => Ok(None),
        }
    }

    async fn save_person_info(
        &self,
        ctx: &RequestContext,
        data: UpdatePersonInfo,
    ) -> AppResult<PersonInfo> {
        let portfolio_id = Self::write_scope(ctx)?;
        data.validate()?;

        let existing = self.content.find_person_info(portfolio_id).await?;
        let info = match existing {
            Some(mut info) => {
                if let Some(full_name) = data.full_name {
                    validate_full_name(&full_name)?;
                    info.full_name = full_name;
                }
                if data.headline.is_some() {
                    info.headline = data.headline;
                }
                if data.email.is_some() {
                    info.email = data.email;
                }
                if data.location.is_some() {
                    info.location = data.location;
                }
                if data.avatar_url.is_some() {
                    info.avatar_url = data.avatar_url;
                }
                if data.cv_url.is_some() {
                    info.cv_url = data.cv_url;
                }
                info
            }
            None => {
                let full_name = data
                    .full_name
                    .ok_or_else(|| AppError::validation("full_name is required"))?;
                validate_full_name(&full_name)?;
                PersonInfo {
                    id: Uuid::new_v4(),
                    portfolio_id,
                    full_name,
                    headline: data.headline,
                    email: data.email,
                    location: data.location,
                    avatar_url: data.avatar_url,
                    cv_url: data.cv_url,
                    visible: true,
                }
            }
        };

        let saved = self.content.upsert_person_info(info).await?;
        self.revalidate(portfolio_id).await?;
        Ok(saved)
    }

    async fn get_hero(&self, ctx: &RequestContext) -> AppResult<Option<HeroContent>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.content.find_hero(portfolio_id).await,
            None => Ok(None),
        }
    }

    async fn save_hero(&self, ctx: &RequestContext, data: UpdateHero) -> AppResult<HeroContent> {
        let portfolio_id = Self::write_scope(ctx)?;
        data.validate()?;

        let existing = self.content.find_hero(portfolio_id).await?;
        let hero = match existing {
            Some(mut hero) => {
                if let Some(heading) = data.heading {
                    hero.heading = heading;
                }
                if data.subheading.is_some() {
                    hero.subheading = data.subheading;
                }
                if data.cta_label.is_some() {
                    hero.cta_label = data.cta_label;
                }
                if data.cta_url.is_some() {
                    hero.cta_url = data.cta_url;
                }
                hero
            }
            None => {
                let heading = data
                    .heading
                    .ok_or_else(|| AppError::validation("heading is required"))?;
                HeroContent {
                    id: Uuid::new_v4(),
                    portfolio_id,
                    heading,
                    subheading: data.subheading,
                    cta_label: data.cta_label,
                    cta_url: data.cta_url,
                    visible: true,
                }
            }
        };

        let saved = self.content.upsert_hero(hero).await?;
        self.revalidate(portfolio_id).await?;
        Ok(saved)
    }
}
