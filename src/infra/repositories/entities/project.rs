//! Project entity. Highlights and tags are JSON string arrays validated
//! at the service boundary.

use sea_orm::entity::prelude::*;

use crate::domain::content::Project;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub highlights: Json,
    pub tags: Json,
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

impl From<Model> for Project {
    fn from(m: Model) -> Self {
        Project {
            id: m.id,
            portfolio_id: m.portfolio_id,
            platform_menu_id: m.platform_menu_id,
            title: m.title,
            summary: m.summary,
            repo_url: m.repo_url,
            live_url: m.live_url,
            highlights: serde_json::from_value(m.highlights).unwrap_or_default(),
            tags: serde_json::from_value(m.tags).unwrap_or_default(),
            order: m.sort_order,
            visible: m.visible,
        }
    }
}
