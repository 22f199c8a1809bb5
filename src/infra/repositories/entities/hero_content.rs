//! Hero content entity (one row per portfolio).

use sea_orm::entity::prelude::*;

use crate::domain::content::HeroContent;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub portfolio_id: Uuid,
    pub heading: String,
    pub subheading: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
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
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HeroContent {
    fn from(m: Model) -> Self {
        HeroContent {
            id: m.id,
            portfolio_id: m.portfolio_id,
            heading: m.heading,
            subheading: m.subheading,
            cta_label: m.cta_label,
            cta_url: m.cta_url,
            visible: m.visible,
        }
    }
}
