//! Menu block entity: one content slot per component inside a
//! component-based menu. Unique on (portfolio_menu_id, sort_order).

use sea_orm::entity::prelude::*;

use crate::domain::{BlockData, MenuBlock};
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_blocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_menu_id: Uuid,
    pub component_key: String,
    pub sort_order: i32,
    pub data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio_menu::Entity",
        from = "Column::PortfolioMenuId",
        to = "super::portfolio_menu::Column::Id",
        on_delete = "Cascade"
    )]
    PortfolioMenu,
}

impl Related<super::portfolio_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioMenu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decode the JSON payload into the typed block data.
    pub fn into_domain(self) -> AppResult<MenuBlock> {
        let data: BlockData = serde_json::from_value(self.data)
            .map_err(|e| AppError::internal(format!("Malformed block data: {}", e)))?;
        Ok(MenuBlock {
            id: self.id,
            portfolio_menu_id: self.portfolio_menu_id,
            component_key: self.component_key,
            order: self.sort_order,
            data,
        })
    }
}
