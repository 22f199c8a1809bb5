//! User management service (super-admin only).

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{is_valid_role, MIN_PASSWORD_LENGTH};
use crate::domain::{
    assert_super_admin, CreateUser, Password, RequestContext, UpdateUser, UserResponse, UserRole,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::{MenuRepository, PortfolioRepository, UserRepository};

use super::provisioning::{provision_account, NewAccount};

/// User lifecycle operations, all gated on the super-admin role.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self, ctx: &RequestContext) -> AppResult<Vec<UserResponse>>;

    async fn get_user(&self, ctx: &RequestContext, id: Uuid) -> AppResult<UserResponse>;

    /// Create an account. Regular accounts are provisioned with a
    /// portfolio and menu instances; the form may also create further
    /// super-admin accounts.
    async fn create_user(&self, ctx: &RequestContext, data: CreateUser) -> AppResult<UserResponse>;

    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateUser,
    ) -> AppResult<UserResponse>;

    /// Delete a user and, through cascades, their portfolio and all of
    /// its content.
    async fn delete_user(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;
}

pub struct UserManager {
    users: Arc<dyn UserRepository>,
    portfolios: Arc<dyn PortfolioRepository>,
    menus: Arc<dyn MenuRepository>,
}

impl UserManager {
    pub fn new(
        users: Arc<dyn UserRepository>,
        portfolios: Arc<dyn PortfolioRepository>,
        menus: Arc<dyn MenuRepository>,
    ) -> Self {
        Self {
            users,
            portfolios,
            menus,
        }
    }

    fn check_password(password: &str) -> AppResult<()> {
        if (password.len() as u64) < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }

    fn parse_role(role: Option<&str>) -> AppResult<UserRole> {
        match role {
            None => Ok(UserRole::User),
            Some(r) if is_valid_role(r) => Ok(UserRole::from(r)),
            Some(r) => Err(AppError::validation(format!("Unknown role: {}", r))),
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self, ctx: &RequestContext) -> AppResult<Vec<UserResponse>> {
        assert_super_admin(ctx)?;

        let mut responses = Vec::new();
        for user in self.users.find_all().await? {
            let portfolio_id = self
                .portfolios
                .find_by_user(user.id)
                .await?
                .map(|p| p.id);
            responses.push(UserResponse::from_user(user, portfolio_id));
        }
        Ok(responses)
    }

    async fn get_user(&self, ctx: &RequestContext, id: Uuid) -> AppResult<UserResponse> {
        assert_super_admin(ctx)?;

        let user = self.users.find_by_id(id).await?.ok_or_not_found()?;
        let portfolio_id = self.portfolios.find_by_user(id).await?.map(|p| p.id);
        Ok(UserResponse::from_user(user, portfolio_id))
    }

    async fn create_user(&self, ctx: &RequestContext, data: CreateUser) -> AppResult<UserResponse> {
        assert_super_admin(ctx)?;

        Self::check_password(&data.password)?;
        let role = Self::parse_role(data.role.as_deref())?;

        let (user, portfolio_id) = provision_account(
            &self.users,
            &self.menus,
            NewAccount {
                email: data.email,
                password: data.password,
                name: data.name,
                role,
            },
        )
        .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User created");
        Ok(UserResponse::from_user(user, portfolio_id))
    }

    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateUser,
    ) -> AppResult<UserResponse> {
        assert_super_admin(ctx)?;

        let mut user = self.users.find_by_id(id).await?.ok_or_not_found()?;

        if let Some(name) = data.name {
            user.name = Some(name);
        }
        if let Some(password) = data.password {
            Self::check_password(&password)?;
            user.password_hash = Password::new(&password)?.into_string();
        }
        if let Some(role) = data.role {
            // Role changes between user and super_admin do not migrate
            // portfolios; the existing portfolio, if any, stays attached.
            user.role = Self::parse_role(Some(&role))?;
        }
        user.updated_at = Utc::now();

        let updated = self.users.update(user).await?;
        let portfolio_id = self.portfolios.find_by_user(id).await?.map(|p| p.id);
        Ok(UserResponse::from_user(updated, portfolio_id))
    }

    async fn delete_user(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        assert_super_admin(ctx)?;

        if ctx.actor.user_id == id {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        self.users.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
