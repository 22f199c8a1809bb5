//! User repository: admin user persistence and account provisioning.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::domain::{AdminUser, MenuBlock, Portfolio, PortfolioMenu};
use crate::errors::{AppError, AppResult};

use super::entities::{menu_block, portfolio, portfolio_menu, user};

/// Persistence operations for admin users.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>>;

    async fn find_all(&self) -> AppResult<Vec<AdminUser>>;

    /// Insert a user together with their portfolio, one menu instance per
    /// platform menu and the empty block slots of component-based menus,
    /// in a single transaction. Super-admin accounts pass an empty
    /// provisioning set.
    async fn create_with_portfolio(
        &self,
        user: AdminUser,
        portfolio: Option<Portfolio>,
        menu_instances: Vec<PortfolioMenu>,
        blocks: Vec<MenuBlock>,
    ) -> AppResult<AdminUser>;

    async fn update(&self, user: AdminUser) -> AppResult<AdminUser>;

    /// Delete a user; the owned portfolio and all content go with it
    /// through cascading foreign keys.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed user store.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> AppResult<Vec<AdminUser>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create_with_portfolio(
        &self,
        new_user: AdminUser,
        new_portfolio: Option<Portfolio>,
        menu_instances: Vec<PortfolioMenu>,
        blocks: Vec<MenuBlock>,
    ) -> AppResult<AdminUser> {
        let txn = self.db.begin().await?;

        let inserted = user::ActiveModel {
            id: Set(new_user.id),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            name: Set(new_user.name),
            role: Set(new_user.role.to_string()),
            created_at: Set(new_user.created_at),
            updated_at: Set(new_user.updated_at),
        }
        .insert(&txn)
        .await?;

        if let Some(p) = new_portfolio {
            portfolio::ActiveModel {
                id: Set(p.id),
                user_id: Set(p.user_id),
                slug: Set(p.slug),
                status: Set(p.status.to_string()),
                rejection_reason: Set(p.rejection_reason),
                is_public: Set(p.is_public),
                approved_at: Set(p.approved_at),
                created_at: Set(p.created_at),
                updated_at: Set(p.updated_at),
            }
            .insert(&txn)
            .await?;
        }

        for instance in menu_instances {
            portfolio_menu::ActiveModel {
                id: Set(instance.id),
                portfolio_id: Set(instance.portfolio_id),
                platform_menu_id: Set(instance.platform_menu_id),
                visible: Set(instance.visible),
                sort_order: Set(instance.order),
                published_visible: Set(instance.published_visible),
                published_sort_order: Set(instance.published_order),
            }
            .insert(&txn)
            .await?;
        }

        for block in blocks {
            menu_block::ActiveModel {
                id: Set(block.id),
                portfolio_menu_id: Set(block.portfolio_menu_id),
                component_key: Set(block.component_key),
                sort_order: Set(block.order),
                data: Set(serde_json::to_value(&block.data)
                    .map_err(|e| AppError::internal(format!("Block encoding error: {}", e)))?),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(inserted.into())
    }

    async fn update(&self, u: AdminUser) -> AppResult<AdminUser> {
        let updated = user::ActiveModel {
            id: Set(u.id),
            email: Set(u.email),
            password_hash: Set(u.password_hash),
            name: Set(u.name),
            role: Set(u.role.to_string()),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
        }
        .update(&self.db)
        .await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
