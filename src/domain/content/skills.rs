//! Skill groups and skills.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::limits::{check_len, check_opt_len, FieldKind};
use crate::errors::AppResult;

/// A named group of skills inside a skills section.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillGroup {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub title: String,
    pub order: i32,
    pub visible: bool,
}

/// One skill inside a group. Ownership resolves through the group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub skill_group_id: Uuid,
    pub name: String,
    /// Self-assessed proficiency 0-100, optional
    pub level: Option<i32>,
    pub order: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSkillGroup {
    pub platform_menu_id: Uuid,
    pub title: String,
    pub order: Option<i32>,
}

impl CreateSkillGroup {
    pub fn validate(&self) -> AppResult<()> {
        check_len("title", FieldKind::Title, &self.title)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSkillGroup {
    pub title: Option<String>,
    pub order: Option<i32>,
}

impl UpdateSkillGroup {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("title", FieldKind::Title, self.title.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSkill {
    pub skill_group_id: Uuid,
    pub name: String,
    pub level: Option<i32>,
    pub order: Option<i32>,
}

impl CreateSkill {
    pub fn validate(&self) -> AppResult<()> {
        check_len("name", FieldKind::Name, &self.name)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub order: Option<i32>,
}

impl UpdateSkill {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("name", FieldKind::Name, self.name.as_deref())
    }
}
