//! Work experience entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::limits::{check_each_len, check_len, check_opt_len, FieldKind};
use crate::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub company: String,
    pub position: String,
    pub summary: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// None = current position
    pub end_date: Option<NaiveDate>,
    pub highlights: Vec<String>,
    pub order: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateExperience {
    pub platform_menu_id: Uuid,
    pub company: String,
    pub position: String,
    pub summary: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub order: Option<i32>,
}

impl CreateExperience {
    pub fn validate(&self) -> AppResult<()> {
        check_len("company", FieldKind::Title, &self.company)?;
        check_len("position", FieldKind::Title, &self.position)?;
        check_opt_len("summary", FieldKind::Summary, self.summary.as_deref())?;
        check_each_len("highlights", FieldKind::Bullet, &self.highlights)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub summary: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub highlights: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl UpdateExperience {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("company", FieldKind::Title, self.company.as_deref())?;
        check_opt_len("position", FieldKind::Title, self.position.as_deref())?;
        check_opt_len("summary", FieldKind::Summary, self.summary.as_deref())?;
        if let Some(highlights) = &self.highlights {
            check_each_len("highlights", FieldKind::Bullet, highlights)?;
        }
        Ok(())
    }
}
