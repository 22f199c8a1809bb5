//! About content entity.

use sea_orm::entity::prelude::*;

use crate::domain::content::AboutContent;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub heading: String,
    pub paragraphs: Json,
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
    #[sea_orm(has_many = "super::principle::Entity")]
    Principles,
}

impl Related<super::principle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Principles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AboutContent {
    fn from(m: Model) -> Self {
        AboutContent {
            id: m.id,
            portfolio_id: m.portfolio_id,
            platform_menu_id: m.platform_menu_id,
            heading: m.heading,
            paragraphs: serde_json::from_value(m.paragraphs).unwrap_or_default(),
            visible: m.visible,
        }
    }
}
