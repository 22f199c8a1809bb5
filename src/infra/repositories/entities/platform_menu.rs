//! Platform menu entity (global catalog).

use sea_orm::entity::prelude::*;

use crate::domain::{PlatformMenu, SectionType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "platform_menus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Immutable after creation
    #[sea_orm(unique)]
    pub key: String,
    pub label: String,
    pub section_type: Option<String>,
    /// Ordered JSON array of component identifiers
    pub component_keys: Json,
    pub sort_order: i32,
    pub enabled: bool,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_menu::Entity")]
    PortfolioMenus,
}

impl Related<super::portfolio_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioMenus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PlatformMenu {
    fn from(m: Model) -> Self {
        let component_keys: Vec<String> =
            serde_json::from_value(m.component_keys).unwrap_or_default();
        PlatformMenu {
            id: m.id,
            key: m.key,
            label: m.label,
            section_type: m.section_type.as_deref().and_then(SectionType::parse),
            component_keys,
            order: m.sort_order,
            enabled: m.enabled,
        }
    }
}
