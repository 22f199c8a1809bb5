//! Architecture section: content, pillars and pillar points.
//!
//! The deepest ownership chain in the system: a PillarPoint resolves its
//! owning portfolio through Pillar and ArchitectureContent.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::limits::{check_len, check_opt_len, FieldKind};
use crate::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArchitectureContent {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub heading: String,
    pub summary: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pillar {
    pub id: Uuid,
    pub architecture_content_id: Uuid,
    pub title: String,
    pub order: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PillarPoint {
    pub id: Uuid,
    pub pillar_id: Uuid,
    pub text: String,
    pub order: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateArchitecture {
    pub platform_menu_id: Uuid,
    pub heading: String,
    pub summary: Option<String>,
}

impl CreateArchitecture {
    pub fn validate(&self) -> AppResult<()> {
        check_len("heading", FieldKind::Title, &self.heading)?;
        check_opt_len("summary", FieldKind::Summary, self.summary.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateArchitecture {
    pub heading: Option<String>,
    pub summary: Option<String>,
}

impl UpdateArchitecture {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("heading", FieldKind::Title, self.heading.as_deref())?;
        check_opt_len("summary", FieldKind::Summary, self.summary.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePillar {
    pub architecture_content_id: Uuid,
    pub title: String,
    pub order: Option<i32>,
}

impl CreatePillar {
    pub fn validate(&self) -> AppResult<()> {
        check_len("title", FieldKind::Title, &self.title)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePillar {
    pub title: Option<String>,
    pub order: Option<i32>,
}

impl UpdatePillar {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("title", FieldKind::Title, self.title.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePillarPoint {
    pub pillar_id: Uuid,
    pub text: String,
    pub order: Option<i32>,
}

impl CreatePillarPoint {
    pub fn validate(&self) -> AppResult<()> {
        check_len("text", FieldKind::Bullet, &self.text)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePillarPoint {
    pub text: Option<String>,
    pub order: Option<i32>,
}

impl UpdatePillarPoint {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("text", FieldKind::Bullet, self.text.as_deref())
    }
}
