//! Account provisioning shared by signup and super-admin user creation.
//!
//! A regular account is a user row, one portfolio in DRAFT, a hidden
//! menu instance per enabled platform menu and the empty block slots of
//! every component-based menu, inserted as one transaction. Super-admin
//! accounts get the user row only.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    AdminUser, BlockData, MenuBlock, Password, Portfolio, PortfolioMenu, PortfolioStatus,
    UserRole,
};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{MenuRepository, UserRepository};

pub(crate) struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub role: UserRole,
}

pub(crate) async fn provision_account(
    users: &Arc<dyn UserRepository>,
    menus: &Arc<dyn MenuRepository>,
    account: NewAccount,
) -> AppResult<(AdminUser, Option<Uuid>)> {
    if users.find_by_email(&account.email).await?.is_some() {
        return Err(AppError::conflict("User"));
    }

    let password_hash = Password::new(&account.password)?.into_string();
    let now = Utc::now();

    let user = AdminUser {
        id: Uuid::new_v4(),
        email: account.email,
        password_hash,
        name: account.name,
        role: account.role,
        created_at: now,
        updated_at: now,
    };

    if account.role.is_super_admin() {
        let created = users
            .create_with_portfolio(user, None, Vec::new(), Vec::new())
            .await?;
        return Ok((created, None));
    }

    let portfolio = Portfolio {
        id: Uuid::new_v4(),
        user_id: user.id,
        slug: None,
        status: PortfolioStatus::Draft,
        rejection_reason: None,
        is_public: false,
        approved_at: None,
        created_at: now,
        updated_at: now,
    };

    let mut instances = Vec::new();
    let mut blocks = Vec::new();
    // The catalog arrives in catalog order; instances get dense
    // per-portfolio orders starting at zero.
    let catalog = menus
        .list_platform_menus()
        .await?
        .into_iter()
        .filter(|menu| menu.enabled);
    for (position, menu) in catalog.enumerate() {
        let instance_id = Uuid::new_v4();
        instances.push(PortfolioMenu {
            id: instance_id,
            portfolio_id: portfolio.id,
            platform_menu_id: menu.id,
            visible: false,
            order: position as i32,
            published_visible: false,
            published_order: position as i32,
        });
        for (index, key) in menu.component_keys.iter().enumerate() {
            blocks.push(MenuBlock {
                id: Uuid::new_v4(),
                portfolio_menu_id: instance_id,
                component_key: key.clone(),
                order: index as i32,
                data: BlockData::empty_for(key)?,
            });
        }
    }

    let portfolio_id = portfolio.id;
    let created = users
        .create_with_portfolio(user, Some(portfolio), instances, blocks)
        .await?;
    Ok((created, Some(portfolio_id)))
}
