//! Portfolio entity.

use sea_orm::entity::prelude::*;

use crate::domain::{Portfolio, PortfolioStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(unique, nullable)]
    pub slug: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub is_public: bool,
    pub approved_at: Option<ChronoDateTimeUtc>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::portfolio_menu::Entity")]
    PortfolioMenus,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::portfolio_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioMenus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Portfolio {
    fn from(m: Model) -> Self {
        Portfolio {
            id: m.id,
            user_id: m.user_id,
            slug: m.slug,
            status: PortfolioStatus::from(m.status.as_str()),
            rejection_reason: m.rejection_reason,
            is_public: m.is_public,
            approved_at: m.approved_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
