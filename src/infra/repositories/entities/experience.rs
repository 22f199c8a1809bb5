//! Experience entity.

use sea_orm::entity::prelude::*;

use crate::domain::content::Experience;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub company: String,
    pub position: String,
    pub summary: Option<String>,
    pub start_date: Option<ChronoDate>,
    pub end_date: Option<ChronoDate>,
    pub highlights: Json,
    pub sort_order: i32,
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

impl From<Model> for Experience {
    fn from(m: Model) -> Self {
        Experience {
            id: m.id,
            portfolio_id: m.portfolio_id,
            platform_menu_id: m.platform_menu_id,
            company: m.company,
            position: m.position,
            summary: m.summary,
            start_date: m.start_date,
            end_date: m.end_date,
            highlights: serde_json::from_value(m.highlights).unwrap_or_default(),
            order: m.sort_order,
            visible: m.visible,
        }
    }
}
