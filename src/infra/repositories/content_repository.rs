//! Content repository: every per-portfolio content family.
//!
//! All rows resolve to an owning portfolio, directly or through parent
//! hops (skill -> group, principle -> about, pillar point -> pillar ->
//! architecture). Services walk those hops with the `find_*` lookups
//! before applying the ownership guard.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::content::{
    AboutContent, ArchitectureContent, Experience, HeroContent, PersonInfo, Pillar, PillarPoint,
    Principle, Project, Skill, SkillGroup,
};
use crate::errors::{AppError, AppResult};

use super::entities::{
    about_content, architecture_content, experience, hero_content, person_info, pillar,
    pillar_point, principle, project, skill, skill_group,
};

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    // Skills

    async fn list_skill_groups(&self, portfolio_id: Uuid) -> AppResult<Vec<SkillGroup>>;
    async fn find_skill_group(&self, id: Uuid) -> AppResult<Option<SkillGroup>>;
    async fn insert_skill_group(&self, group: SkillGroup) -> AppResult<SkillGroup>;
    async fn update_skill_group(&self, group: SkillGroup) -> AppResult<SkillGroup>;
    async fn delete_skill_group(&self, id: Uuid) -> AppResult<()>;

    async fn list_skills(&self, skill_group_id: Uuid) -> AppResult<Vec<Skill>>;
    async fn find_skill(&self, id: Uuid) -> AppResult<Option<Skill>>;
    async fn insert_skill(&self, skill: Skill) -> AppResult<Skill>;
    async fn update_skill(&self, skill: Skill) -> AppResult<Skill>;
    async fn delete_skill(&self, id: Uuid) -> AppResult<()>;

    // Projects

    async fn list_projects(&self, portfolio_id: Uuid) -> AppResult<Vec<Project>>;
    async fn find_project(&self, id: Uuid) -> AppResult<Option<Project>>;
    async fn insert_project(&self, p: Project) -> AppResult<Project>;
    async fn update_project(&self, p: Project) -> AppResult<Project>;
    async fn delete_project(&self, id: Uuid) -> AppResult<()>;

    // Experience

    async fn list_experiences(&self, portfolio_id: Uuid) -> AppResult<Vec<Experience>>;
    async fn find_experience(&self, id: Uuid) -> AppResult<Option<Experience>>;
    async fn insert_experience(&self, e: Experience) -> AppResult<Experience>;
    async fn update_experience(&self, e: Experience) -> AppResult<Experience>;
    async fn delete_experience(&self, id: Uuid) -> AppResult<()>;

    // About

    async fn list_about_contents(&self, portfolio_id: Uuid) -> AppResult<Vec<AboutContent>>;
    async fn find_about_content(&self, id: Uuid) -> AppResult<Option<AboutContent>>;
    async fn insert_about_content(&self, a: AboutContent) -> AppResult<AboutContent>;
    async fn update_about_content(&self, a: AboutContent) -> AppResult<AboutContent>;
    async fn delete_about_content(&self, id: Uuid) -> AppResult<()>;

    async fn list_principles(&self, about_content_id: Uuid) -> AppResult<Vec<Principle>>;
    async fn find_principle(&self, id: Uuid) -> AppResult<Option<Principle>>;
    async fn insert_principle(&self, p: Principle) -> AppResult<Principle>;
    async fn update_principle(&self, p: Principle) -> AppResult<Principle>;
    async fn delete_principle(&self, id: Uuid) -> AppResult<()>;

    // Architecture

    async fn list_architecture_contents(
        &self,
        portfolio_id: Uuid,
    ) -> AppResult<Vec<ArchitectureContent>>;
    async fn find_architecture_content(&self, id: Uuid)
        -> AppResult<Option<ArchitectureContent>>;
    async fn insert_architecture_content(
        &self,
        a: ArchitectureContent,
    ) -> AppResult<ArchitectureContent>;
    async fn update_architecture_content(
        &self,
        a: ArchitectureContent,
    ) -> AppResult<ArchitectureContent>;
    async fn delete_architecture_content(&self, id: Uuid) -> AppResult<()>;

    async fn list_pillars(&self, architecture_content_id: Uuid) -> AppResult<Vec<Pillar>>;
    async fn find_pillar(&self, id: Uuid) -> AppResult<Option<Pillar>>;
    async fn insert_pillar(&self, p: Pillar) -> AppResult<Pillar>;
    async fn update_pillar(&self, p: Pillar) -> AppResult<Pillar>;
    async fn delete_pillar(&self, id: Uuid) -> AppResult<()>;

    async fn list_pillar_points(&self, pillar_id: Uuid) -> AppResult<Vec<PillarPoint>>;
    async fn find_pillar_point(&self, id: Uuid) -> AppResult<Option<PillarPoint>>;
    async fn insert_pillar_point(&self, p: PillarPoint) -> AppResult<PillarPoint>;
    async fn update_pillar_point(&self, p: PillarPoint) -> AppResult<PillarPoint>;
    async fn delete_pillar_point(&self, id: Uuid) -> AppResult<()>;

    // Profile (one row per portfolio, created on first save)

    async fn find_person_info(&self, portfolio_id: Uuid) -> AppResult<Option<PersonInfo>>;
    async fn upsert_person_info(&self, info: PersonInfo) -> AppResult<PersonInfo>;

    async fn find_hero(&self, portfolio_id: Uuid) -> AppResult<Option<HeroContent>>;
    async fn upsert_hero(&self, hero: HeroContent) -> AppResult<HeroContent>;
}

pub struct ContentStore {
    db: DatabaseConnection,
}

impl ContentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn json_encode<T: serde::Serialize>(field: &str, value: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("{} encoding error: {}", field, e)))
}

fn skill_group_active(g: SkillGroup) -> skill_group::ActiveModel {
    skill_group::ActiveModel {
        id: Set(g.id),
        portfolio_id: Set(g.portfolio_id),
        platform_menu_id: Set(g.platform_menu_id),
        title: Set(g.title),
        sort_order: Set(g.order),
        visible: Set(g.visible),
    }
}

fn skill_active(s: Skill) -> skill::ActiveModel {
    skill::ActiveModel {
        id: Set(s.id),
        skill_group_id: Set(s.skill_group_id),
        name: Set(s.name),
        level: Set(s.level),
        sort_order: Set(s.order),
        visible: Set(s.visible),
    }
}

fn project_active(p: Project) -> AppResult<project::ActiveModel> {
    Ok(project::ActiveModel {
        id: Set(p.id),
        portfolio_id: Set(p.portfolio_id),
        platform_menu_id: Set(p.platform_menu_id),
        title: Set(p.title),
        summary: Set(p.summary),
        repo_url: Set(p.repo_url),
        live_url: Set(p.live_url),
        highlights: Set(json_encode("highlights", &p.highlights)?),
        tags: Set(json_encode("tags", &p.tags)?),
        sort_order: Set(p.order),
        visible: Set(p.visible),
    })
}

fn experience_active(e: Experience) -> AppResult<experience::ActiveModel> {
    Ok(experience::ActiveModel {
        id: Set(e.id),
        portfolio_id: Set(e.portfolio_id),
        platform_menu_id: Set(e.platform_menu_id),
        company: Set(e.company),
        position: Set(e.position),
        summary: Set(e.summary),
        start_date: Set(e.start_date),
        end_date: Set(e.end_date),
        highlights: Set(json_encode("highlights", &e.highlights)?),
        sort_order: Set(e.order),
        visible: Set(e.visible),
    })
}

fn about_active(a: AboutContent) -> AppResult<about_content::ActiveModel> {
    Ok(about_content::ActiveModel {
        id: Set(a.id),
        portfolio_id: Set(a.portfolio_id),
        platform_menu_id: Set(a.platform_menu_id),
        heading: Set(a.heading),
        paragraphs: Set(json_encode("paragraphs", &a.paragraphs)?),
        visible: Set(a.visible),
    })
}

fn principle_active(p: Principle) -> principle::ActiveModel {
    principle::ActiveModel {
        id: Set(p.id),
        about_content_id: Set(p.about_content_id),
        title: Set(p.title),
        body: Set(p.body),
        sort_order: Set(p.order),
        visible: Set(p.visible),
    }
}

fn architecture_active(a: ArchitectureContent) -> architecture_content::ActiveModel {
    architecture_content::ActiveModel {
        id: Set(a.id),
        portfolio_id: Set(a.portfolio_id),
        platform_menu_id: Set(a.platform_menu_id),
        heading: Set(a.heading),
        summary: Set(a.summary),
        visible: Set(a.visible),
    }
}

fn pillar_active(p: Pillar) -> pillar::ActiveModel {
    pillar::ActiveModel {
        id: Set(p.id),
        architecture_content_id: Set(p.architecture_content_id),
        title: Set(p.title),
        sort_order: Set(p.order),
        visible: Set(p.visible),
    }
}

fn pillar_point_active(p: PillarPoint) -> pillar_point::ActiveModel {
    pillar_point::ActiveModel {
        id: Set(p.id),
        pillar_id: Set(p.pillar_id),
        text: Set(p.text),
        sort_order: Set(p.order),
        visible: Set(p.visible),
    }
}

fn person_info_active(i: PersonInfo) -> person_info::ActiveModel {
    person_info::ActiveModel {
        id: Set(i.id),
        portfolio_id: Set(i.portfolio_id),
        full_name: Set(i.full_name),
        headline: Set(i.headline),
        email: Set(i.email),
        location: Set(i.location),
        avatar_url: Set(i.avatar_url),
        cv_url: Set(i.cv_url),
        visible: Set(i.visible),
    }
}

fn hero_active(h: HeroContent) -> hero_content::ActiveModel {
    hero_content::ActiveModel {
        id: Set(h.id),
        portfolio_id: Set(h.portfolio_id),
        heading: Set(h.heading),
        subheading: Set(h.subheading),
        cta_label: Set(h.cta_label),
        cta_url: Set(h.cta_url),
        visible: Set(h.visible),
    }
}

macro_rules! ensure_deleted {
    ($result:expr) => {
        if $result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
    };
}

#[async_trait]
impl ContentRepository for ContentStore {
    async fn list_skill_groups(&self, portfolio_id: Uuid) -> AppResult<Vec<SkillGroup>> {
        let models = skill_group::Entity::find()
            .filter(skill_group::Column::PortfolioId.eq(portfolio_id))
            .order_by_asc(skill_group::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_skill_group(&self, id: Uuid) -> AppResult<Option<SkillGroup>> {
        let model = skill_group::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_skill_group(&self, group: SkillGroup) -> AppResult<SkillGroup> {
        Ok(skill_group_active(group).insert(&self.db).await?.into())
    }

    async fn update_skill_group(&self, group: SkillGroup) -> AppResult<SkillGroup> {
        Ok(skill_group_active(group).update(&self.db).await?.into())
    }

    async fn delete_skill_group(&self, id: Uuid) -> AppResult<()> {
        let result = skill_group::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_skills(&self, skill_group_id: Uuid) -> AppResult<Vec<Skill>> {
        let models = skill::Entity::find()
            .filter(skill::Column::SkillGroupId.eq(skill_group_id))
            .order_by_asc(skill::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_skill(&self, id: Uuid) -> AppResult<Option<Skill>> {
        let model = skill::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_skill(&self, s: Skill) -> AppResult<Skill> {
        Ok(skill_active(s).insert(&self.db).await?.into())
    }

    async fn update_skill(&self, s: Skill) -> AppResult<Skill> {
        Ok(skill_active(s).update(&self.db).await?.into())
    }

    async fn delete_skill(&self, id: Uuid) -> AppResult<()> {
        let result = skill::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_projects(&self, portfolio_id: Uuid) -> AppResult<Vec<Project>> {
        let models = project::Entity::find()
            .filter(project::Column::PortfolioId.eq(portfolio_id))
            .order_by_asc(project::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_project(&self, id: Uuid) -> AppResult<Option<Project>> {
        let model = project::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_project(&self, p: Project) -> AppResult<Project> {
        Ok(project_active(p)?.insert(&self.db).await?.into())
    }

    async fn update_project(&self, p: Project) -> AppResult<Project> {
        Ok(project_active(p)?.update(&self.db).await?.into())
    }

    async fn delete_project(&self, id: Uuid) -> AppResult<()> {
        let result = project::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_experiences(&self, portfolio_id: Uuid) -> AppResult<Vec<Experience>> {
        let models = experience::Entity::find()
            .filter(experience::Column::PortfolioId.eq(portfolio_id))
            .order_by_asc(experience::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_experience(&self, id: Uuid) -> AppResult<Option<Experience>> {
        let model = experience::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_experience(&self, e: Experience) -> AppResult<Experience> {
        Ok(experience_active(e)?.insert(&self.db).await?.into())
    }

    async fn update_experience(&self, e: Experience) -> AppResult<Experience> {
        Ok(experience_active(e)?.update(&self.db).await?.into())
    }

    async fn delete_experience(&self, id: Uuid) -> AppResult<()> {
        let result = experience::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_about_contents(&self, portfolio_id: Uuid) -> AppResult<Vec<AboutContent>> {
        let models = about_content::Entity::find()
            .filter(about_content::Column::PortfolioId.eq(portfolio_id))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_about_content(&self, id: Uuid) -> AppResult<Option<AboutContent>> {
        let model = about_content::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_about_content(&self, a: AboutContent) -> AppResult<AboutContent> {
        Ok(about_active(a)?.insert(&self.db).await?.into())
    }

    async fn update_about_content(&self, a: AboutContent) -> AppResult<AboutContent> {
        Ok(about_active(a)?.update(&self.db).await?.into())
    }

    async fn delete_about_content(&self, id: Uuid) -> AppResult<()> {
        let result = about_content::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_principles(&self, about_content_id: Uuid) -> AppResult<Vec<Principle>> {
        let models = principle::Entity::find()
            .filter(principle::Column::AboutContentId.eq(about_content_id))
            .order_by_asc(principle::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_principle(&self, id: Uuid) -> AppResult<Option<Principle>> {
        let model = principle::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_principle(&self, p: Principle) -> AppResult<Principle> {
        Ok(principle_active(p).insert(&self.db).await?.into())
    }

    async fn update_principle(&self, p: Principle) -> AppResult<Principle> {
        Ok(principle_active(p).update(&self.db).await?.into())
    }

    async fn delete_principle(&self, id: Uuid) -> AppResult<()> {
        let result = principle::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_architecture_contents(
        &self,
        portfolio_id: Uuid,
    ) -> AppResult<Vec<ArchitectureContent>> {
        let models = architecture_content::Entity::find()
            .filter(architecture_content::Column::PortfolioId.eq(portfolio_id))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_architecture_content(
        &self,
        id: Uuid,
    ) -> AppResult<Option<ArchitectureContent>> {
        let model = architecture_content::Entity::find_by_id(id)
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn insert_architecture_content(
        &self,
        a: ArchitectureContent,
    ) -> AppResult<ArchitectureContent> {
        Ok(architecture_active(a).insert(&self.db).await?.into())
    }

    async fn update_architecture_content(
        &self,
        a: ArchitectureContent,
    ) -> AppResult<ArchitectureContent> {
        Ok(architecture_active(a).update(&self.db).await?.into())
    }

    async fn delete_architecture_content(&self, id: Uuid) -> AppResult<()> {
        let result = architecture_content::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_pillars(&self, architecture_content_id: Uuid) -> AppResult<Vec<Pillar>> {
        let models = pillar::Entity::find()
            .filter(pillar::Column::ArchitectureContentId.eq(architecture_content_id))
            .order_by_asc(pillar::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_pillar(&self, id: Uuid) -> AppResult<Option<Pillar>> {
        let model = pillar::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_pillar(&self, p: Pillar) -> AppResult<Pillar> {
        Ok(pillar_active(p).insert(&self.db).await?.into())
    }

    async fn update_pillar(&self, p: Pillar) -> AppResult<Pillar> {
        Ok(pillar_active(p).update(&self.db).await?.into())
    }

    async fn delete_pillar(&self, id: Uuid) -> AppResult<()> {
        let result = pillar::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn list_pillar_points(&self, pillar_id: Uuid) -> AppResult<Vec<PillarPoint>> {
        let models = pillar_point::Entity::find()
            .filter(pillar_point::Column::PillarId.eq(pillar_id))
            .order_by_asc(pillar_point::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_pillar_point(&self, id: Uuid) -> AppResult<Option<PillarPoint>> {
        let model = pillar_point::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn insert_pillar_point(&self, p: PillarPoint) -> AppResult<PillarPoint> {
        Ok(pillar_point_active(p).insert(&self.db).await?.into())
    }

    async fn update_pillar_point(&self, p: PillarPoint) -> AppResult<PillarPoint> {
        Ok(pillar_point_active(p).update(&self.db).await?.into())
    }

    async fn delete_pillar_point(&self, id: Uuid) -> AppResult<()> {
        let result = pillar_point::Entity::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted!(result);
        Ok(())
    }

    async fn find_person_info(&self, portfolio_id: Uuid) -> AppResult<Option<PersonInfo>> {
        let model = person_info::Entity::find()
            .filter(person_info::Column::PortfolioId.eq(portfolio_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn upsert_person_info(&self, info: PersonInfo) -> AppResult<PersonInfo> {
        let existing = person_info::Entity::find()
            .filter(person_info::Column::PortfolioId.eq(info.portfolio_id))
            .one(&self.db)
            .await?;

        let updated = match existing {
            Some(row) => {
                let mut active = person_info_active(info);
                active.id = Set(row.id);
                active.update(&self.db).await?
            }
            None => person_info_active(info).insert(&self.db).await?,
        };
        Ok(updated.into())
    }

    async fn find_hero(&self, portfolio_id: Uuid) -> AppResult<Option<HeroContent>> {
        let model = hero_content::Entity::find()
            .filter(hero_content::Column::PortfolioId.eq(portfolio_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn upsert_hero(&self, hero: HeroContent) -> AppResult<HeroContent> {
        let existing = hero_content::Entity::find()
            .filter(hero_content::Column::PortfolioId.eq(hero.portfolio_id))
            .one(&self.db)
            .await?;

        let updated = match existing {
            Some(row) => {
                let mut active = hero_active(hero);
                active.id = Set(row.id);
                active.update(&self.db).await?
            }
            None => hero_active(hero).insert(&self.db).await?,
        };
        Ok(updated.into())
    }
}
