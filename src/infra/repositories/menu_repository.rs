//! Menu repository: the platform menu catalog, per-portfolio instances
//! and menu blocks.
//!
//! Catalog mutations fan out to every portfolio inside one transaction:
//! creating a platform menu provisions an instance (and empty block
//! slots) for each portfolio, and editing its component key list
//! reconciles every portfolio's blocks against the new list.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::config::BLOCK_ORDER_REASSIGN_OFFSET;
use crate::domain::{
    plan_block_reconciliation, BlockData, MenuBlock, PlatformMenu, PortfolioMenu,
    PortfolioMenuView,
};
use crate::errors::{AppError, AppResult, OptionExt};

use super::entities::{
    about_content, architecture_content, experience, menu_block, platform_menu, portfolio,
    portfolio_menu, project, skill_group,
};

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    // Platform menu catalog (super-admin)

    async fn list_platform_menus(&self) -> AppResult<Vec<PlatformMenu>>;

    async fn find_platform_menu(&self, id: Uuid) -> AppResult<Option<PlatformMenu>>;

    async fn find_platform_menu_by_key(&self, key: &str) -> AppResult<Option<PlatformMenu>>;

    /// Insert a catalog entry and provision a hidden instance, with one
    /// empty block per component key, for every existing portfolio.
    async fn create_platform_menu(&self, menu: PlatformMenu) -> AppResult<PlatformMenu>;

    /// Update a catalog entry. When the component key list changed, every
    /// portfolio's blocks are reconciled against it: surviving keys keep
    /// their block (and data), removed keys lose theirs, added keys get a
    /// fresh empty slot.
    async fn update_platform_menu(&self, menu: PlatformMenu) -> AppResult<PlatformMenu>;

    /// Delete a catalog entry. Refused while any portfolio still has
    /// content rows attached to this menu.
    async fn delete_platform_menu(&self, id: Uuid) -> AppResult<()>;

    // Per-portfolio instances

    async fn list_portfolio_menus(&self, portfolio_id: Uuid) -> AppResult<Vec<PortfolioMenuView>>;

    /// Published projection for the public page: published-visible
    /// instances of enabled platform menus, in published order.
    async fn list_published_menus(&self, portfolio_id: Uuid) -> AppResult<Vec<PortfolioMenuView>>;

    async fn find_portfolio_menu(&self, id: Uuid) -> AppResult<Option<PortfolioMenu>>;

    async fn set_visibility(&self, id: Uuid, visible: bool) -> AppResult<PortfolioMenu>;

    /// Reassign draft sort orders to match the given id sequence.
    async fn reorder_portfolio_menus(&self, portfolio_id: Uuid, ids: Vec<Uuid>) -> AppResult<()>;

    /// Copy every instance's draft visibility and order into the
    /// published snapshot, in one statement. Repeating the call without
    /// intervening draft edits leaves the snapshot unchanged.
    async fn publish_portfolio_menus(&self, portfolio_id: Uuid) -> AppResult<()>;

    // Blocks

    async fn list_blocks(&self, portfolio_menu_id: Uuid) -> AppResult<Vec<MenuBlock>>;

    async fn find_block(&self, id: Uuid) -> AppResult<Option<MenuBlock>>;

    async fn update_block_data(&self, id: Uuid, data: BlockData) -> AppResult<MenuBlock>;
}

pub struct MenuStore {
    db: DatabaseConnection,
}

impl MenuStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn view(instance: portfolio_menu::Model, catalog: platform_menu::Model) -> PortfolioMenuView {
        let platform: PlatformMenu = catalog.into();
        PortfolioMenuView {
            id: instance.id,
            portfolio_id: instance.portfolio_id,
            platform_menu_id: instance.platform_menu_id,
            key: platform.key,
            label: platform.label,
            section_type: platform.section_type,
            renderable: platform.section_type.map(|s| s.has_editor()).unwrap_or(false)
                || !platform.component_keys.is_empty(),
            component_keys: platform.component_keys,
            visible: instance.visible,
            order: instance.sort_order,
            published_visible: instance.published_visible,
            published_order: instance.published_sort_order,
            platform_enabled: platform.enabled,
        }
    }

    /// Apply a block reconciliation plan for one portfolio menu. The
    /// two-phase order reassignment keeps the unique
    /// (portfolio_menu_id, sort_order) constraint satisfied throughout.
    async fn reconcile_blocks(
        txn: &DatabaseTransaction,
        portfolio_menu_id: Uuid,
        new_keys: &[String],
    ) -> AppResult<()> {
        let existing: Vec<(Uuid, String)> = menu_block::Entity::find()
            .filter(menu_block::Column::PortfolioMenuId.eq(portfolio_menu_id))
            .order_by_asc(menu_block::Column::SortOrder)
            .all(txn)
            .await?
            .into_iter()
            .map(|b| (b.id, b.component_key))
            .collect();

        let plan = plan_block_reconciliation(&existing, new_keys);
        if plan.is_noop() {
            return Ok(());
        }

        // Phase one: park survivors at high offsets.
        for (block_id, new_order) in &plan.reorder {
            menu_block::Entity::update_many()
                .col_expr(
                    menu_block::Column::SortOrder,
                    Expr::value(BLOCK_ORDER_REASSIGN_OFFSET + new_order),
                )
                .filter(menu_block::Column::Id.eq(*block_id))
                .exec(txn)
                .await?;
        }

        if !plan.delete.is_empty() {
            menu_block::Entity::delete_many()
                .filter(menu_block::Column::Id.is_in(plan.delete.clone()))
                .exec(txn)
                .await?;
        }

        for (component_key, order) in &plan.create {
            let data = BlockData::empty_for(component_key)?;
            menu_block::ActiveModel {
                id: Set(Uuid::new_v4()),
                portfolio_menu_id: Set(portfolio_menu_id),
                component_key: Set(component_key.clone()),
                sort_order: Set(*order),
                data: Set(serde_json::to_value(&data)
                    .map_err(|e| AppError::internal(format!("Block encoding error: {}", e)))?),
            }
            .insert(txn)
            .await?;
        }

        // Phase two: bring survivors down to their final order.
        for (block_id, new_order) in &plan.reorder {
            menu_block::Entity::update_many()
                .col_expr(menu_block::Column::SortOrder, Expr::value(*new_order))
                .filter(menu_block::Column::Id.eq(*block_id))
                .exec(txn)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl MenuRepository for MenuStore {
    async fn list_platform_menus(&self) -> AppResult<Vec<PlatformMenu>> {
        let models = platform_menu::Entity::find()
            .order_by_asc(platform_menu::Column::SortOrder)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_platform_menu(&self, id: Uuid) -> AppResult<Option<PlatformMenu>> {
        let model = platform_menu::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_platform_menu_by_key(&self, key: &str) -> AppResult<Option<PlatformMenu>> {
        let model = platform_menu::Entity::find()
            .filter(platform_menu::Column::Key.eq(key))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn create_platform_menu(&self, menu: PlatformMenu) -> AppResult<PlatformMenu> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let inserted = platform_menu::ActiveModel {
            id: Set(menu.id),
            key: Set(menu.key.clone()),
            label: Set(menu.label.clone()),
            section_type: Set(menu.section_type.map(|s| s.as_str().to_owned())),
            component_keys: Set(serde_json::to_value(&menu.component_keys)
                .map_err(|e| AppError::internal(format!("Component key encoding error: {}", e)))?),
            sort_order: Set(menu.order),
            enabled: Set(menu.enabled),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        // Provision a hidden instance for every portfolio.
        let portfolio_ids: Vec<Uuid> = portfolio::Entity::find()
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        for portfolio_id in portfolio_ids {
            // The instance appends to the portfolio's own draft order,
            // not the catalog position.
            let last = portfolio_menu::Entity::find()
                .filter(portfolio_menu::Column::PortfolioId.eq(portfolio_id))
                .order_by_desc(portfolio_menu::Column::SortOrder)
                .one(&txn)
                .await?;
            let next_order = last.map(|m| m.sort_order + 1).unwrap_or(0);

            let instance_id = Uuid::new_v4();
            portfolio_menu::ActiveModel {
                id: Set(instance_id),
                portfolio_id: Set(portfolio_id),
                platform_menu_id: Set(menu.id),
                visible: Set(false),
                sort_order: Set(next_order),
                published_visible: Set(false),
                published_sort_order: Set(next_order),
            }
            .insert(&txn)
            .await?;

            for (index, key) in menu.component_keys.iter().enumerate() {
                let data = BlockData::empty_for(key)?;
                menu_block::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    portfolio_menu_id: Set(instance_id),
                    component_key: Set(key.clone()),
                    sort_order: Set(index as i32),
                    data: Set(serde_json::to_value(&data).map_err(|e| {
                        AppError::internal(format!("Block encoding error: {}", e))
                    })?),
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;
        Ok(inserted.into())
    }

    async fn update_platform_menu(&self, menu: PlatformMenu) -> AppResult<PlatformMenu> {
        let txn = self.db.begin().await?;

        let current = platform_menu::Entity::find_by_id(menu.id)
            .one(&txn)
            .await?
            .ok_or_not_found()?;
        let current_keys: Vec<String> =
            serde_json::from_value(current.component_keys.clone()).unwrap_or_default();

        let updated = platform_menu::ActiveModel {
            id: Set(menu.id),
            key: Set(current.key.clone()),
            label: Set(menu.label.clone()),
            section_type: Set(menu.section_type.map(|s| s.as_str().to_owned())),
            component_keys: Set(serde_json::to_value(&menu.component_keys)
                .map_err(|e| AppError::internal(format!("Component key encoding error: {}", e)))?),
            sort_order: Set(menu.order),
            enabled: Set(menu.enabled),
            created_at: Set(current.created_at),
            updated_at: Set(Utc::now()),
        }
        .update(&txn)
        .await?;

        if current_keys != menu.component_keys {
            let instance_ids: Vec<Uuid> = portfolio_menu::Entity::find()
                .filter(portfolio_menu::Column::PlatformMenuId.eq(menu.id))
                .all(&txn)
                .await?
                .into_iter()
                .map(|i| i.id)
                .collect();

            for instance_id in instance_ids {
                Self::reconcile_blocks(&txn, instance_id, &menu.component_keys).await?;
            }
        }

        txn.commit().await?;
        Ok(updated.into())
    }

    async fn delete_platform_menu(&self, id: Uuid) -> AppResult<()> {
        let menu = platform_menu::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut references: u64 = 0;
        references += skill_group::Entity::find()
            .filter(skill_group::Column::PlatformMenuId.eq(id))
            .count(&self.db)
            .await?;
        references += project::Entity::find()
            .filter(project::Column::PlatformMenuId.eq(id))
            .count(&self.db)
            .await?;
        references += experience::Entity::find()
            .filter(experience::Column::PlatformMenuId.eq(id))
            .count(&self.db)
            .await?;
        references += about_content::Entity::find()
            .filter(about_content::Column::PlatformMenuId.eq(id))
            .count(&self.db)
            .await?;
        references += architecture_content::Entity::find()
            .filter(architecture_content::Column::PlatformMenuId.eq(id))
            .count(&self.db)
            .await?;

        if references > 0 {
            return Err(AppError::has_content(format!(
                "Menu '{}' still has {} content item(s) attached and cannot be deleted",
                menu.key, references
            )));
        }

        // Instances and blocks cascade.
        platform_menu::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn list_portfolio_menus(&self, portfolio_id: Uuid) -> AppResult<Vec<PortfolioMenuView>> {
        let rows = portfolio_menu::Entity::find()
            .filter(portfolio_menu::Column::PortfolioId.eq(portfolio_id))
            .find_also_related(platform_menu::Entity)
            .order_by_asc(portfolio_menu::Column::SortOrder)
            .all(&self.db)
            .await?;

        let mut views = Vec::with_capacity(rows.len());
        for (instance, catalog) in rows {
            let catalog = catalog.ok_or_else(|| {
                AppError::internal("Portfolio menu instance without platform menu")
            })?;
            views.push(Self::view(instance, catalog));
        }
        Ok(views)
    }

    async fn list_published_menus(&self, portfolio_id: Uuid) -> AppResult<Vec<PortfolioMenuView>> {
        let rows = portfolio_menu::Entity::find()
            .filter(portfolio_menu::Column::PortfolioId.eq(portfolio_id))
            .filter(portfolio_menu::Column::PublishedVisible.eq(true))
            .find_also_related(platform_menu::Entity)
            .filter(platform_menu::Column::Enabled.eq(true))
            .order_by_asc(portfolio_menu::Column::PublishedSortOrder)
            .all(&self.db)
            .await?;

        let mut views = Vec::with_capacity(rows.len());
        for (instance, catalog) in rows {
            let catalog = catalog.ok_or_else(|| {
                AppError::internal("Portfolio menu instance without platform menu")
            })?;
            let view = Self::view(instance, catalog);
            // Non-renderable menus never reach the public page, even if a
            // stale snapshot says visible.
            if view.renderable {
                views.push(view);
            }
        }
        Ok(views)
    }

    async fn find_portfolio_menu(&self, id: Uuid) -> AppResult<Option<PortfolioMenu>> {
        let model = portfolio_menu::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn set_visibility(&self, id: Uuid, visible: bool) -> AppResult<PortfolioMenu> {
        let model = portfolio_menu::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: portfolio_menu::ActiveModel = model.into();
        active.visible = Set(visible);
        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }

    async fn reorder_portfolio_menus(&self, portfolio_id: Uuid, ids: Vec<Uuid>) -> AppResult<()> {
        let txn = self.db.begin().await?;

        // The whole batch is refused when any id resolves to a menu
        // that is platform-disabled or has nothing to render.
        let rows = portfolio_menu::Entity::find()
            .filter(portfolio_menu::Column::PortfolioId.eq(portfolio_id))
            .filter(portfolio_menu::Column::Id.is_in(ids.clone()))
            .find_also_related(platform_menu::Entity)
            .all(&txn)
            .await?;
        if rows.len() != ids.len() {
            txn.rollback().await?;
            return Err(AppError::validation(
                "Ids do not match the portfolio's menus",
            ));
        }
        for (_, catalog) in rows {
            let catalog: PlatformMenu = catalog
                .ok_or_else(|| {
                    AppError::internal("Portfolio menu instance without platform menu")
                })?
                .into();
            let renderable = catalog.section_type.map(|s| s.has_editor()).unwrap_or(false)
                || !catalog.component_keys.is_empty();
            if !catalog.enabled || !renderable {
                txn.rollback().await?;
                return Err(AppError::validation(format!(
                    "Menu '{}' cannot be reordered while it is disabled or has nothing to render",
                    catalog.key
                )));
            }
        }

        for (index, id) in ids.iter().enumerate() {
            let result = portfolio_menu::Entity::update_many()
                .col_expr(portfolio_menu::Column::SortOrder, Expr::value(index as i32))
                .filter(portfolio_menu::Column::Id.eq(*id))
                .filter(portfolio_menu::Column::PortfolioId.eq(portfolio_id))
                .exec(&txn)
                .await?;
            if result.rows_affected == 0 {
                txn.rollback().await?;
                return Err(AppError::validation(format!(
                    "Menu {} does not belong to this portfolio",
                    id
                )));
            }
        }

        txn.commit().await?;
        Ok(())
    }

    async fn publish_portfolio_menus(&self, portfolio_id: Uuid) -> AppResult<()> {
        portfolio_menu::Entity::update_many()
            .col_expr(
                portfolio_menu::Column::PublishedVisible,
                Expr::col(portfolio_menu::Column::Visible).into(),
            )
            .col_expr(
                portfolio_menu::Column::PublishedSortOrder,
                Expr::col(portfolio_menu::Column::SortOrder).into(),
            )
            .filter(portfolio_menu::Column::PortfolioId.eq(portfolio_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn list_blocks(&self, portfolio_menu_id: Uuid) -> AppResult<Vec<MenuBlock>> {
        let models = menu_block::Entity::find()
            .filter(menu_block::Column::PortfolioMenuId.eq(portfolio_menu_id))
            .order_by_asc(menu_block::Column::SortOrder)
            .all(&self.db)
            .await?;
        models.into_iter().map(|m| m.into_domain()).collect()
    }

    async fn find_block(&self, id: Uuid) -> AppResult<Option<MenuBlock>> {
        let model = menu_block::Entity::find_by_id(id).one(&self.db).await?;
        model.map(|m| m.into_domain()).transpose()
    }

    async fn update_block_data(&self, id: Uuid, data: BlockData) -> AppResult<MenuBlock> {
        let model = menu_block::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: menu_block::ActiveModel = model.into();
        active.data = Set(serde_json::to_value(&data)
            .map_err(|e| AppError::internal(format!("Block encoding error: {}", e)))?);
        let updated = active.update(&self.db).await?;
        updated.into_domain()
    }
}
