//! Portfolio menu instance entity.
//!
//! Unique on (portfolio_id, platform_menu_id). Carries draft state and
//! the last-published snapshot.

use sea_orm::entity::prelude::*;

use crate::domain::PortfolioMenu;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_menus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub visible: bool,
    pub sort_order: i32,
    pub published_visible: bool,
    pub published_sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio::Entity",
        from = "Column::PortfolioId",
        to = "super::portfolio::Column::Id",
        on_delete = "Cascade"
    )]
    Portfolio,
    #[sea_orm(
        belongs_to = "super::platform_menu::Entity",
        from = "Column::PlatformMenuId",
        to = "super::platform_menu::Column::Id",
        on_delete = "Cascade"
    )]
    PlatformMenu,
    #[sea_orm(has_many = "super::menu_block::Entity")]
    MenuBlocks,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl Related<super::platform_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlatformMenu.def()
    }
}

impl Related<super::menu_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuBlocks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PortfolioMenu {
    fn from(m: Model) -> Self {
        PortfolioMenu {
            id: m.id,
            portfolio_id: m.portfolio_id,
            platform_menu_id: m.platform_menu_id,
            visible: m.visible,
            order: m.sort_order,
            published_visible: m.published_visible,
            published_order: m.published_sort_order,
        }
    }
}
