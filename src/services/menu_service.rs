//! Menu service: platform catalog management (super-admin) and
//! per-portfolio menu editing (owner).

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::menu::{validate_component_keys, validate_menu_key};
use crate::domain::{
    assert_super_admin, assert_writable, BlockData, MenuBlock, PlatformMenu, PortfolioMenu,
    PortfolioMenuView, PortfolioStatus, RequestContext, SectionType,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::{MenuRepository, PortfolioRepository};
use crate::infra::Revalidator;

/// Platform menu creation payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePlatformMenu {
    /// Immutable key, lowercase `[a-z0-9_-]+`
    #[schema(example = "testimonials")]
    pub key: String,
    pub label: String,
    /// Section type for editor-backed menus
    pub section_type: Option<SectionType>,
    /// Component slots for component-based menus
    #[serde(default)]
    pub component_keys: Vec<String>,
    pub order: Option<i32>,
    /// Defaults to enabled
    pub enabled: Option<bool>,
}

/// Platform menu update payload. The key is immutable and absent here.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePlatformMenu {
    pub label: Option<String>,
    pub section_type: Option<SectionType>,
    pub component_keys: Option<Vec<String>>,
    pub order: Option<i32>,
    pub enabled: Option<bool>,
}

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait MenuService: Send + Sync {
    // Platform catalog (super-admin)

    async fn list_platform_menus(&self, ctx: &RequestContext) -> AppResult<Vec<PlatformMenu>>;

    async fn create_platform_menu(
        &self,
        ctx: &RequestContext,
        data: CreatePlatformMenu,
    ) -> AppResult<PlatformMenu>;

    async fn update_platform_menu(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePlatformMenu,
    ) -> AppResult<PlatformMenu>;

    async fn delete_platform_menu(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()>;

    // Per-portfolio editing

    /// Menus of the scoped portfolio, platform-disabled instances
    /// included. Empty under the platform scope.
    async fn list_menus(&self, ctx: &RequestContext) -> AppResult<Vec<PortfolioMenuView>>;

    async fn set_visibility(
        &self,
        ctx: &RequestContext,
        portfolio_menu_id: Uuid,
        visible: bool,
    ) -> AppResult<PortfolioMenu>;

    async fn reorder_menus(&self, ctx: &RequestContext, ids: Vec<Uuid>) -> AppResult<()>;

    /// Copy the scoped portfolio's draft menu configuration into the
    /// published snapshot. Publishing twice in a row is a no-op the
    /// second time.
    async fn publish_menus(&self, ctx: &RequestContext) -> AppResult<()>;

    async fn list_blocks(
        &self,
        ctx: &RequestContext,
        portfolio_menu_id: Uuid,
    ) -> AppResult<Vec<MenuBlock>>;

    async fn update_block(
        &self,
        ctx: &RequestContext,
        block_id: Uuid,
        data: BlockData,
    ) -> AppResult<MenuBlock>;
}

pub struct MenuManager {
    menus: Arc<dyn MenuRepository>,
    portfolios: Arc<dyn PortfolioRepository>,
    revalidator: Arc<dyn Revalidator>,
}

impl MenuManager {
    pub fn new(
        menus: Arc<dyn MenuRepository>,
        portfolios: Arc<dyn PortfolioRepository>,
        revalidator: Arc<dyn Revalidator>,
    ) -> Self {
        Self {
            menus,
            portfolios,
            revalidator,
        }
    }

    /// A menu instance may be read under any scope that covers its
    /// portfolio, impersonation included.
    fn assert_readable(ctx: &RequestContext, portfolio_id: Uuid) -> AppResult<()> {
        if ctx.scope.portfolio_id == Some(portfolio_id) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[async_trait]
impl MenuService for MenuManager {
    async fn list_platform_menus(&self, ctx: &RequestContext) -> AppResult<Vec<PlatformMenu>> {
        assert_super_admin(ctx)?;
        self.menus.list_platform_menus().await
    }

    async fn create_platform_menu(
        &self,
        ctx: &RequestContext,
        data: CreatePlatformMenu,
    ) -> AppResult<PlatformMenu> {
        assert_super_admin(ctx)?;

        validate_menu_key(&data.key)?;
        if data.section_type.is_none() {
            // Without an editor, component slots are the only way the
            // menu can ever render.
            validate_component_keys(&data.component_keys)?;
        } else if !data.component_keys.is_empty() {
            validate_component_keys(&data.component_keys)?;
        }

        if self
            .menus
            .find_platform_menu_by_key(&data.key)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Menu"));
        }

        let order = match data.order {
            Some(o) => o,
            None => self.menus.list_platform_menus().await?.len() as i32,
        };

        let menu = self
            .menus
            .create_platform_menu(PlatformMenu {
                id: Uuid::new_v4(),
                key: data.key,
                label: data.label,
                section_type: data.section_type,
                component_keys: data.component_keys,
                order,
                enabled: data.enabled.unwrap_or(true),
            })
            .await?;

        tracing::info!(menu_key = %menu.key, "Platform menu created");
        Ok(menu)
    }

    async fn update_platform_menu(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePlatformMenu,
    ) -> AppResult<PlatformMenu> {
        assert_super_admin(ctx)?;

        let mut menu = self.menus.find_platform_menu(id).await?.ok_or_not_found()?;

        if let Some(label) = data.label {
            menu.label = label;
        }
        if let Some(section_type) = data.section_type {
            menu.section_type = Some(section_type);
        }
        if let Some(component_keys) = data.component_keys {
            if !component_keys.is_empty() || menu.section_type.is_none() {
                validate_component_keys(&component_keys)?;
            }
            menu.component_keys = component_keys;
        }
        if let Some(order) = data.order {
            menu.order = order;
        }
        if let Some(enabled) = data.enabled {
            menu.enabled = enabled;
        }

        let updated = self.menus.update_platform_menu(menu).await?;

        // Catalog changes (label, enablement, slots) affect every
        // published page at once.
        self.revalidator.invalidate_all().await?;

        Ok(updated)
    }

    async fn delete_platform_menu(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        assert_super_admin(ctx)?;
        self.menus.delete_platform_menu(id).await?;
        self.revalidator.invalidate_all().await?;
        tracing::info!(menu_id = %id, "Platform menu deleted");
        Ok(())
    }

    async fn list_menus(&self, ctx: &RequestContext) -> AppResult<Vec<PortfolioMenuView>> {
        match ctx.scope.portfolio_id {
            Some(portfolio_id) => self.menus.list_portfolio_menus(portfolio_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn set_visibility(
        &self,
        ctx: &RequestContext,
        portfolio_menu_id: Uuid,
        visible: bool,
    ) -> AppResult<PortfolioMenu> {
        let instance = self
            .menus
            .find_portfolio_menu(portfolio_menu_id)
            .await?
            .ok_or_not_found()?;
        assert_writable(ctx, instance.portfolio_id)?;

        if visible {
            let platform = self
                .menus
                .find_platform_menu(instance.platform_menu_id)
                .await?
                .ok_or_not_found()?;
            platform.check_visibility_allowed()?;
        }

        self.menus.set_visibility(portfolio_menu_id, visible).await
    }

    async fn reorder_menus(&self, ctx: &RequestContext, ids: Vec<Uuid>) -> AppResult<()> {
        let portfolio_id = ctx.scope.portfolio_id.ok_or(AppError::Forbidden)?;
        assert_writable(ctx, portfolio_id)?;

        // One bad id rejects the whole batch: every id must belong to
        // the portfolio and resolve to an enabled, renderable menu.
        let views = self.menus.list_portfolio_menus(portfolio_id).await?;
        for id in &ids {
            let view = views.iter().find(|v| v.id == *id).ok_or_else(|| {
                AppError::validation(format!("Menu {} does not belong to this portfolio", id))
            })?;
            if !view.platform_enabled || !view.renderable {
                return Err(AppError::validation(format!(
                    "Menu '{}' cannot be reordered while it is disabled or has nothing to render",
                    view.key
                )));
            }
        }

        self.menus.reorder_portfolio_menus(portfolio_id, ids).await
    }

    async fn publish_menus(&self, ctx: &RequestContext) -> AppResult<()> {
        let portfolio_id = ctx.scope.portfolio_id.ok_or(AppError::Forbidden)?;
        assert_writable(ctx, portfolio_id)?;

        self.menus.publish_portfolio_menus(portfolio_id).await?;

        // A published page renders the fresh snapshot immediately.
        if let Some(portfolio) = self.portfolios.find_by_id(portfolio_id).await? {
            if portfolio.status == PortfolioStatus::Published {
                if let Some(slug) = &portfolio.slug {
                    self.revalidator.invalidate_portfolio(slug).await?;
                }
            }
        }

        tracing::info!(portfolio_id = %portfolio_id, "Menu configuration published");
        Ok(())
    }

    async fn list_blocks(
        &self,
        ctx: &RequestContext,
        portfolio_menu_id: Uuid,
    ) -> AppResult<Vec<MenuBlock>> {
        let instance = self
            .menus
            .find_portfolio_menu(portfolio_menu_id)
            .await?
            .ok_or_not_found()?;
        Self::assert_readable(ctx, instance.portfolio_id)?;
        self.menus.list_blocks(portfolio_menu_id).await
    }

    async fn update_block(
        &self,
        ctx: &RequestContext,
        block_id: Uuid,
        data: BlockData,
    ) -> AppResult<MenuBlock> {
        let block = self.menus.find_block(block_id).await?.ok_or_not_found()?;
        let instance = self
            .menus
            .find_portfolio_menu(block.portfolio_menu_id)
            .await?
            .ok_or_not_found()?;
        assert_writable(ctx, instance.portfolio_id)?;

        // The payload type is fixed by the slot's component key.
        if data.component_key() != block.component_key {
            return Err(AppError::validation(format!(
                "Block expects component '{}', got '{}'",
                block.component_key,
                data.component_key()
            )));
        }
        data.validate()?;

        self.menus.update_block_data(block_id, data).await
    }
}
