//! Session resolution: access token plus optional impersonation token
//! into a full request context.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{assert_super_admin, resolve_admin_scope, Actor, RequestContext, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::{PortfolioRepository, UserRepository};

use super::AuthService;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Resolve the request context for an authenticated admin request.
    ///
    /// The impersonation token is best-effort: an invalid, foreign or
    /// dangling token (portfolio deleted since issuance) degrades to the
    /// platform scope instead of failing the request.
    async fn resolve_context(
        &self,
        access_token: &str,
        impersonation_token: Option<String>,
    ) -> AppResult<RequestContext>;

    /// Start impersonating a portfolio (super-admin). Returns the signed
    /// token for the impersonation cookie.
    async fn start_impersonation(
        &self,
        ctx: &RequestContext,
        portfolio_id: Uuid,
    ) -> AppResult<String>;
}

pub struct SessionManager {
    auth: Arc<dyn AuthService>,
    users: Arc<dyn UserRepository>,
    portfolios: Arc<dyn PortfolioRepository>,
}

impl SessionManager {
    pub fn new(
        auth: Arc<dyn AuthService>,
        users: Arc<dyn UserRepository>,
        portfolios: Arc<dyn PortfolioRepository>,
    ) -> Self {
        Self {
            auth,
            users,
            portfolios,
        }
    }

    async fn impersonated_portfolio(&self, actor_id: Uuid, token: &str) -> Option<Uuid> {
        let claims = self.auth.verify_impersonation_token(token).ok()?;
        // Tokens are bound to the admin they were issued to.
        if claims.sub != actor_id {
            return None;
        }
        match self.portfolios.find_by_id(claims.portfolio_id).await {
            Ok(Some(portfolio)) => Some(portfolio.id),
            // Deleted since issuance, or lookup failed: fall back to the
            // platform scope.
            _ => None,
        }
    }
}

#[async_trait]
impl SessionService for SessionManager {
    async fn resolve_context(
        &self,
        access_token: &str,
        impersonation_token: Option<String>,
    ) -> AppResult<RequestContext> {
        let claims = self.auth.verify_token(access_token)?;

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let owned_portfolio_id = if user.is_super_admin() {
            None
        } else {
            self.portfolios.find_by_user(user.id).await?.map(|p| p.id)
        };

        let actor = Actor {
            user_id: user.id,
            email: user.email,
            role: user.role,
            owned_portfolio_id,
        };

        let impersonated = match (actor.role, impersonation_token) {
            (UserRole::SuperAdmin, Some(token)) => {
                self.impersonated_portfolio(actor.user_id, &token).await
            }
            _ => None,
        };

        let scope = resolve_admin_scope(&actor, impersonated);
        Ok(RequestContext::new(actor, scope))
    }

    async fn start_impersonation(
        &self,
        ctx: &RequestContext,
        portfolio_id: Uuid,
    ) -> AppResult<String> {
        assert_super_admin(ctx)?;

        self.portfolios
            .find_by_id(portfolio_id)
            .await?
            .ok_or_not_found()?;

        let token = self
            .auth
            .issue_impersonation_token(ctx.actor.user_id, portfolio_id)?;

        tracing::info!(
            admin_id = %ctx.actor.user_id,
            portfolio_id = %portfolio_id,
            "Impersonation started"
        );
        Ok(token)
    }
}
