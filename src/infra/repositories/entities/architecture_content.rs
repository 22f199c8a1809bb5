//! Architecture content entity.

use sea_orm::entity::prelude::*;

use crate::domain::content::ArchitectureContent;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "architecture_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub heading: String,
    pub summary: Option<String>,
    pub visible: bool,
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
    #[sea_orm(has_many = "super::pillar::Entity")]
    Pillars,
}

impl Related<super::pillar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pillars.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ArchitectureContent {
    fn from(m: Model) -> Self {
        ArchitectureContent {
            id: m.id,
            portfolio_id: m.portfolio_id,
            platform_menu_id: m.platform_menu_id,
            heading: m.heading,
            summary: m.summary,
            visible: m.visible,
        }
    }
}
