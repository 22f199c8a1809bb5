//! Person info and hero content (single-instance per portfolio).
//!
//! These are upsert-style sections: one row per portfolio, created on
//! first save.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::limits::{check_len, check_opt_len, FieldKind};
use crate::errors::AppResult;

/// Contact / person details.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonInfo {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub full_name: String,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub cv_url: Option<String>,
    pub visible: bool,
}

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeroContent {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub heading: String,
    pub subheading: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePersonInfo {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub cv_url: Option<String>,
}

impl UpdatePersonInfo {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("full_name", FieldKind::Name, self.full_name.as_deref())?;
        check_opt_len("headline", FieldKind::Title, self.headline.as_deref())?;
        check_opt_len("email", FieldKind::Name, self.email.as_deref())?;
        check_opt_len("location", FieldKind::Title, self.location.as_deref())?;
        check_opt_len("avatar_url", FieldKind::Url, self.avatar_url.as_deref())?;
        check_opt_len("cv_url", FieldKind::Url, self.cv_url.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateHero {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
}

impl UpdateHero {
    pub fn validate(&self) -> AppResult<()> {
        check_opt_len("heading", FieldKind::Title, self.heading.as_deref())?;
        check_opt_len("subheading", FieldKind::Summary, self.subheading.as_deref())?;
        check_opt_len("cta_label", FieldKind::Name, self.cta_label.as_deref())?;
        check_opt_len("cta_url", FieldKind::Url, self.cta_url.as_deref())
    }
}

/// Full name is required on first save; checked here so the caller gets
/// a clear error rather than a database constraint violation.
pub fn validate_full_name(full_name: &str) -> AppResult<()> {
    if full_name.trim().is_empty() {
        return Err(crate::errors::AppError::validation("full_name is required"));
    }
    check_len("full_name", FieldKind::Name, full_name)
}
