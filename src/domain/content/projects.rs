//! Projects, with highlights and tags as validated string arrays.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::limits::{check_each_len, check_len, check_opt_len, FieldKind};
use crate::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    /// Bullet lines shown under the project
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub order: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProject {
    pub platform_menu_id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub order: Option<i32>,
}

impl CreateProject {
    pub fn validate(&self) -> AppResult<()> {
        check_len("title", FieldKind::Title, &self.title)?;
        check_opt_len("summary", FieldKind::Summary, self.summary.as_deref())?;
        check_opt_len("repo_url", FieldKind::Url, self.repo_url.as_deref())?;
        check_opt_len("live_url", FieldKind::Url, self.live_url.as_deref())?;
        check_each_len("highlights", FieldKind::Bullet, &self.highlights)?;
        check_each_len("tags", FieldKind::Tag, &self.tags)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl UpdateProject {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("title", FieldKind::Title, self.title.as_deref())?;
        check_opt_len("summary", FieldKind::Summary, self.summary.as_deref())?;
        check_opt_len("repo_url", FieldKind::Url, self.repo_url.as_deref())?;
        check_opt_len("live_url", FieldKind::Url, self.live_url.as_deref())?;
        if let Some(highlights) = &self.highlights {
            check_each_len("highlights", FieldKind::Bullet, highlights)?;
        }
        if let Some(tags) = &self.tags {
            check_each_len("tags", FieldKind::Tag, tags)?;
        }
        Ok(())
    }
}
