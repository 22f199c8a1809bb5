//! About section content and its principles.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::limits::{check_each_len, check_len, check_opt_len, FieldKind};
use crate::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AboutContent {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub visible: bool,
}

/// A guiding principle under the about section. Ownership resolves
/// through the parent AboutContent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Principle {
    pub id: Uuid,
    pub about_content_id: Uuid,
    pub title: String,
    pub body: String,
    pub order: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAbout {
    pub platform_menu_id: Uuid,
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl CreateAbout {
    pub fn validate(&self) -> AppResult<()> {
        check_len("heading", FieldKind::Title, &self.heading)?;
        check_each_len("paragraphs", FieldKind::LongText, &self.paragraphs)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAbout {
    pub heading: Option<String>,
    pub paragraphs: Option<Vec<String>>,
}

impl UpdateAbout {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("heading", FieldKind::Title, self.heading.as_deref())?;
        if let Some(paragraphs) = &self.paragraphs {
            check_each_len("paragraphs", FieldKind::LongText, paragraphs)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePrinciple {
    pub about_content_id: Uuid,
    pub title: String,
    pub body: String,
    pub order: Option<i32>,
}

impl CreatePrinciple {
    pub fn validate(&self) -> AppResult<()> {
        check_len("title", FieldKind::Title, &self.title)?;
        check_len("body", FieldKind::Summary, &self.body)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePrinciple {
    pub title: Option<String>,
    pub body: Option<String>,
    pub order: Option<i32>,
}

impl UpdatePrinciple {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("title", FieldKind::Title, self.title.as_deref())?;
        check_opt_len("body", FieldKind::Summary, self.body.as_deref())
    }
}
