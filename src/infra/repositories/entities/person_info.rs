//! Person info entity (one row per portfolio).

use sea_orm::entity::prelude::*;

use crate::domain::content::PersonInfo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person_infos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub portfolio_id: Uuid,
    pub full_name: String,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub cv_url: Option<String>,
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

impl From<Model> for PersonInfo {
    fn from(m: Model) -> Self {
        PersonInfo {
            id: m.id,
            portfolio_id: m.portfolio_id,
            full_name: m.full_name,
            headline: m.headline,
            email: m.email,
            location: m.location,
            avatar_url: m.avatar_url,
            cv_url: m.cv_url,
            visible: m.visible,
        }
    }
}
