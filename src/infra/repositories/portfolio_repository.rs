//! Portfolio repository: status transitions and the publish snapshot.
//!
//! Review transitions are compare-and-set updates: the status filter is
//! part of the UPDATE itself, so two concurrent reviewers cannot both
//! win. Zero affected rows means the portfolio left the expected state
//! in the meantime.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::{Portfolio, PortfolioStatus};
use crate::errors::{AppError, AppResult, OptionExt};

use super::entities::{portfolio, portfolio_menu};

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Portfolio>>;

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Portfolio>>;

    /// Slug lookup regardless of status (uniqueness checks).
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Portfolio>>;

    /// Public lookup: published, publicly listed portfolios only.
    async fn find_published_by_slug(&self, slug: &str) -> AppResult<Option<Portfolio>>;

    async fn list_by_status(&self, status: PortfolioStatus) -> AppResult<Vec<Portfolio>>;

    /// DRAFT/REJECTED -> READY_FOR_REVIEW. The rejection reason is kept;
    /// only approval clears it.
    async fn submit_for_review(&self, id: Uuid) -> AppResult<Portfolio>;

    /// READY_FOR_REVIEW -> PUBLISHED. Clears the rejection reason, marks
    /// the portfolio public, stamps `approved_at` and snapshots every
    /// menu's draft visibility and order into the published columns.
    async fn approve(&self, id: Uuid, approved_at: DateTime<Utc>) -> AppResult<Portfolio>;

    /// READY_FOR_REVIEW -> REJECTED with a reason for the owner.
    async fn reject(&self, id: Uuid, reason: &str) -> AppResult<Portfolio>;

    async fn set_slug(&self, id: Uuid, slug: Option<String>) -> AppResult<Portfolio>;
}

pub struct PortfolioStore {
    db: DatabaseConnection,
}

impl PortfolioStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: Uuid) -> AppResult<Portfolio> {
        portfolio::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or_not_found()
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Portfolio>> {
        let model = portfolio::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Portfolio>> {
        let model = portfolio::Entity::find()
            .filter(portfolio::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Portfolio>> {
        let model = portfolio::Entity::find()
            .filter(portfolio::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_published_by_slug(&self, slug: &str) -> AppResult<Option<Portfolio>> {
        let model = portfolio::Entity::find()
            .filter(portfolio::Column::Slug.eq(slug))
            .filter(portfolio::Column::Status.eq(PortfolioStatus::Published.as_str()))
            .filter(portfolio::Column::IsPublic.eq(true))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_status(&self, status: PortfolioStatus) -> AppResult<Vec<Portfolio>> {
        let models = portfolio::Entity::find()
            .filter(portfolio::Column::Status.eq(status.as_str()))
            .order_by_asc(portfolio::Column::UpdatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn submit_for_review(&self, id: Uuid) -> AppResult<Portfolio> {
        let result = portfolio::Entity::update_many()
            .col_expr(
                portfolio::Column::Status,
                Expr::value(PortfolioStatus::ReadyForReview.as_str()),
            )
            .col_expr(portfolio::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(portfolio::Column::Id.eq(id))
            .filter(portfolio::Column::Status.is_in([
                PortfolioStatus::Draft.as_str(),
                PortfolioStatus::Rejected.as_str(),
            ]))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            let current = self.fetch(id).await?;
            return Err(AppError::invalid_state(format!(
                "Portfolio cannot be submitted from status {}; expected DRAFT or REJECTED",
                current.status
            )));
        }

        self.fetch(id).await
    }

    async fn approve(&self, id: Uuid, approved_at: DateTime<Utc>) -> AppResult<Portfolio> {
        let txn = self.db.begin().await?;

        let result = portfolio::Entity::update_many()
            .col_expr(
                portfolio::Column::Status,
                Expr::value(PortfolioStatus::Published.as_str()),
            )
            .col_expr(
                portfolio::Column::RejectionReason,
                Expr::value(Option::<String>::None),
            )
            .col_expr(portfolio::Column::IsPublic, Expr::value(true))
            .col_expr(portfolio::Column::ApprovedAt, Expr::value(Some(approved_at)))
            .col_expr(portfolio::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(portfolio::Column::Id.eq(id))
            .filter(
                portfolio::Column::Status.eq(PortfolioStatus::ReadyForReview.as_str()),
            )
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            let current = self.fetch(id).await?;
            return Err(AppError::invalid_state(format!(
                "Portfolio status is {}; expected READY_FOR_REVIEW",
                current.status
            )));
        }

        // Publish snapshot: the public page renders these columns.
        portfolio_menu::Entity::update_many()
            .col_expr(
                portfolio_menu::Column::PublishedVisible,
                Expr::col(portfolio_menu::Column::Visible).into(),
            )
            .col_expr(
                portfolio_menu::Column::PublishedSortOrder,
                Expr::col(portfolio_menu::Column::SortOrder).into(),
            )
            .filter(portfolio_menu::Column::PortfolioId.eq(id))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        self.fetch(id).await
    }

    async fn reject(&self, id: Uuid, reason: &str) -> AppResult<Portfolio> {
        let result = portfolio::Entity::update_many()
            .col_expr(
                portfolio::Column::Status,
                Expr::value(PortfolioStatus::Rejected.as_str()),
            )
            .col_expr(
                portfolio::Column::RejectionReason,
                Expr::value(Some(reason.to_owned())),
            )
            .col_expr(portfolio::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(portfolio::Column::Id.eq(id))
            .filter(
                portfolio::Column::Status.eq(PortfolioStatus::ReadyForReview.as_str()),
            )
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            let current = self.fetch(id).await?;
            return Err(AppError::invalid_state(format!(
                "Portfolio status is {}; expected READY_FOR_REVIEW",
                current.status
            )));
        }

        self.fetch(id).await
    }

    async fn set_slug(&self, id: Uuid, slug: Option<String>) -> AppResult<Portfolio> {
        let result = portfolio::Entity::update_many()
            .col_expr(portfolio::Column::Slug, Expr::value(slug))
            .col_expr(portfolio::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(portfolio::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.fetch(id).await
    }
}
