//! Portfolio entity and its publication state machine.
//!
//! Status flow: DRAFT -> READY_FOR_REVIEW -> {PUBLISHED, REJECTED},
//! with REJECTED -> READY_FOR_REVIEW allowed for resubmission.
//! PUBLISHED is terminal from the owner's perspective.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug regex"));

/// Validate a public portfolio slug: lowercase `[a-z0-9-]+`, 1-64 chars.
/// Uniqueness is enforced by storage.
pub fn validate_slug(slug: &str) -> AppResult<()> {
    if slug.is_empty() || slug.len() > 64 {
        return Err(AppError::validation(format!(
            "Slug must be between 1 and 64 characters (got {})",
            slug.len()
        )));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(AppError::validation(
            "Slug may only contain lowercase letters, digits and '-'",
        ));
    }
    Ok(())
}

/// Portfolio publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioStatus {
    Draft,
    ReadyForReview,
    Rejected,
    Published,
}

impl PortfolioStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioStatus::Draft => "DRAFT",
            PortfolioStatus::ReadyForReview => "READY_FOR_REVIEW",
            PortfolioStatus::Rejected => "REJECTED",
            PortfolioStatus::Published => "PUBLISHED",
        }
    }

    /// Owner may submit for review only from DRAFT or REJECTED.
    pub fn can_submit(&self) -> bool {
        matches!(self, PortfolioStatus::Draft | PortfolioStatus::Rejected)
    }

    /// Review actions (approve/reject) are valid only while in review.
    pub fn can_review(&self) -> bool {
        matches!(self, PortfolioStatus::ReadyForReview)
    }
}

impl From<&str> for PortfolioStatus {
    fn from(s: &str) -> Self {
        match s {
            "READY_FOR_REVIEW" => PortfolioStatus::ReadyForReview,
            "REJECTED" => PortfolioStatus::Rejected,
            "PUBLISHED" => PortfolioStatus::Published,
            _ => PortfolioStatus::Draft,
        }
    }
}

impl std::fmt::Display for PortfolioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Portfolio domain entity: one user's complete content set and
/// publication state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub user_id: Uuid,
    pub slug: Option<String>,
    pub status: PortfolioStatus,
    pub rejection_reason: Option<String>,
    pub is_public: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// Validate the DRAFT/REJECTED -> READY_FOR_REVIEW transition.
    ///
    /// The rejection reason is intentionally left in place on resubmission;
    /// only approval clears it.
    pub fn check_submit(&self) -> AppResult<()> {
        if self.status.can_submit() {
            Ok(())
        } else {
            Err(AppError::invalid_state(format!(
                "Portfolio cannot be submitted from status {}; expected DRAFT or REJECTED",
                self.status
            )))
        }
    }
}

/// Guard for review actions. Repositories re-check the status with a
/// conditional update at write time; this gives the early, readable error.
pub fn check_reviewable(status: PortfolioStatus) -> AppResult<()> {
    if status.can_review() {
        Ok(())
    } else {
        Err(AppError::invalid_state(format!(
            "Portfolio status is {}; expected READY_FOR_REVIEW",
            status
        )))
    }
}

/// Portfolio projection returned to admin clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub slug: Option<String>,
    pub status: PortfolioStatus,
    pub rejection_reason: Option<String>,
    pub is_public: bool,
    pub approved_at: Option<DateTime<Utc>>,
}

impl From<Portfolio> for PortfolioResponse {
    fn from(p: Portfolio) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            slug: p.slug,
            status: p.status,
            rejection_reason: p.rejection_reason,
            is_public: p.is_public,
            approved_at: p.approved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio(status: PortfolioStatus) -> Portfolio {
        Portfolio {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            slug: None,
            status,
            rejection_reason: None,
            is_public: false,
            approved_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn submit_allowed_from_draft_and_rejected() {
        assert!(portfolio(PortfolioStatus::Draft).check_submit().is_ok());
        assert!(portfolio(PortfolioStatus::Rejected).check_submit().is_ok());
    }

    #[test]
    fn submit_refused_from_review_and_published() {
        for status in [PortfolioStatus::ReadyForReview, PortfolioStatus::Published] {
            let err = portfolio(status).check_submit().unwrap_err();
            assert!(matches!(err, AppError::InvalidState(_)));
        }
    }

    #[test]
    fn review_only_from_ready_for_review() {
        assert!(check_reviewable(PortfolioStatus::ReadyForReview).is_ok());
        for status in [
            PortfolioStatus::Draft,
            PortfolioStatus::Rejected,
            PortfolioStatus::Published,
        ] {
            let err = check_reviewable(status).unwrap_err();
            match err {
                AppError::InvalidState(msg) => {
                    assert!(msg.contains("READY_FOR_REVIEW"), "message names expected state")
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn slug_format() {
        assert!(validate_slug("jane-doe").is_ok());
        assert!(validate_slug("x2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Jane").is_err());
        assert!(validate_slug("under_score").is_err());
        assert!(validate_slug(&"a".repeat(65)).is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            PortfolioStatus::Draft,
            PortfolioStatus::ReadyForReview,
            PortfolioStatus::Rejected,
            PortfolioStatus::Published,
        ] {
            assert_eq!(PortfolioStatus::from(status.as_str()), status);
        }
    }
}
