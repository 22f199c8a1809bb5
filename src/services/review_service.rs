//! Publication workflow: owner submission, super-admin review.
//!
//! Transitions are validated twice: here for a readable error, and again
//! inside the repository's compare-and-set update so concurrent review
//! actions cannot both win.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::limits::{check_len, FieldKind};
use crate::domain::{
    assert_super_admin, assert_writable, check_reviewable, validate_slug, PortfolioResponse,
    RequestContext,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::PortfolioRepository;
use crate::infra::Revalidator;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// The scoped portfolio, as shown in the admin dashboard.
    async fn get_portfolio(&self, ctx: &RequestContext) -> AppResult<PortfolioResponse>;

    /// Owner claims the public slug for their portfolio.
    async fn set_slug(&self, ctx: &RequestContext, slug: String) -> AppResult<PortfolioResponse>;

    /// Owner submits for review (DRAFT or REJECTED only). A previous
    /// rejection reason stays attached until approval.
    async fn submit(&self, ctx: &RequestContext) -> AppResult<PortfolioResponse>;

    /// Review queue, oldest submission first (super-admin).
    async fn list_pending(&self, ctx: &RequestContext) -> AppResult<Vec<PortfolioResponse>>;

    /// Approve: publish the portfolio, clear any rejection reason and
    /// snapshot menu visibility/order for the public page (super-admin).
    async fn approve(&self, ctx: &RequestContext, portfolio_id: Uuid)
        -> AppResult<PortfolioResponse>;

    /// Reject with a reason shown to the owner (super-admin).
    async fn reject(
        &self,
        ctx: &RequestContext,
        portfolio_id: Uuid,
        reason: String,
    ) -> AppResult<PortfolioResponse>;
}

pub struct Reviewer {
    portfolios: Arc<dyn PortfolioRepository>,
    revalidator: Arc<dyn Revalidator>,
}

impl Reviewer {
    pub fn new(portfolios: Arc<dyn PortfolioRepository>, revalidator: Arc<dyn Revalidator>) -> Self {
        Self {
            portfolios,
            revalidator,
        }
    }
}

#[async_trait]
impl ReviewService for Reviewer {
    async fn get_portfolio(&self, ctx: &RequestContext) -> AppResult<PortfolioResponse> {
        let portfolio_id = ctx.scope.portfolio_id.ok_or(AppError::NotFound)?;
        let portfolio = self
            .portfolios
            .find_by_id(portfolio_id)
            .await?
            .ok_or_not_found()?;
        Ok(portfolio.into())
    }

    async fn set_slug(&self, ctx: &RequestContext, slug: String) -> AppResult<PortfolioResponse> {
        let portfolio_id = ctx.scope.portfolio_id.ok_or(AppError::Forbidden)?;
        assert_writable(ctx, portfolio_id)?;
        validate_slug(&slug)?;

        if let Some(existing) = self.portfolios.find_by_slug(&slug).await? {
            if existing.id != portfolio_id {
                return Err(AppError::conflict("Slug"));
            }
        }

        let updated = self.portfolios.set_slug(portfolio_id, Some(slug)).await?;
        Ok(updated.into())
    }

    async fn submit(&self, ctx: &RequestContext) -> AppResult<PortfolioResponse> {
        let portfolio_id = ctx.scope.portfolio_id.ok_or(AppError::Forbidden)?;
        assert_writable(ctx, portfolio_id)?;

        let portfolio = self
            .portfolios
            .find_by_id(portfolio_id)
            .await?
            .ok_or_not_found()?;
        portfolio.check_submit()?;

        let updated = self.portfolios.submit_for_review(portfolio_id).await?;
        tracing::info!(portfolio_id = %portfolio_id, "Portfolio submitted for review");
        Ok(updated.into())
    }

    async fn list_pending(&self, ctx: &RequestContext) -> AppResult<Vec<PortfolioResponse>> {
        assert_super_admin(ctx)?;
        let pending = self
            .portfolios
            .list_by_status(crate::domain::PortfolioStatus::ReadyForReview)
            .await?;
        Ok(pending.into_iter().map(Into::into).collect())
    }

    async fn approve(
        &self,
        ctx: &RequestContext,
        portfolio_id: Uuid,
    ) -> AppResult<PortfolioResponse> {
        assert_super_admin(ctx)?;

        let portfolio = self
            .portfolios
            .find_by_id(portfolio_id)
            .await?
            .ok_or_not_found()?;
        check_reviewable(portfolio.status)?;

        let slug = portfolio.slug.clone().ok_or_else(|| {
            AppError::validation("Portfolio has no slug; the owner must set one before approval")
        })?;

        let updated = self.portfolios.approve(portfolio_id, Utc::now()).await?;
        self.revalidator.invalidate_portfolio(&slug).await?;

        tracing::info!(portfolio_id = %portfolio_id, slug = %slug, "Portfolio approved");
        Ok(updated.into())
    }

    async fn reject(
        &self,
        ctx: &RequestContext,
        portfolio_id: Uuid,
        reason: String,
    ) -> AppResult<PortfolioResponse> {
        assert_super_admin(ctx)?;

        let reason = reason.trim().to_owned();
        if reason.is_empty() {
            return Err(AppError::validation("A rejection reason is required"));
        }
        check_len("reason", FieldKind::Summary, &reason)?;

        let portfolio = self
            .portfolios
            .find_by_id(portfolio_id)
            .await?
            .ok_or_not_found()?;
        check_reviewable(portfolio.status)?;

        let updated = self.portfolios.reject(portfolio_id, &reason).await?;
        tracing::info!(portfolio_id = %portfolio_id, "Portfolio rejected");
        Ok(updated.into())
    }
}
