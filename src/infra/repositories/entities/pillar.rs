//! Pillar entity. Owned through its architecture content.

use sea_orm::entity::prelude::*;

use crate::domain::content::Pillar;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pillars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub architecture_content_id: Uuid,
    pub title: String,
    pub sort_order: i32,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::architecture_content::Entity",
        from = "Column::ArchitectureContentId",
        to = "super::architecture_content::Column::Id",
        on_delete = "Cascade"
    )]
    ArchitectureContent,
    #[sea_orm(has_many = "super::pillar_point::Entity")]
    Points,
}

impl Related<super::architecture_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArchitectureContent.def()
    }
}

impl Related<super::pillar_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Points.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Pillar {
    fn from(m: Model) -> Self {
        Pillar {
            id: m.id,
            architecture_content_id: m.architecture_content_id,
            title: m.title,
            order: m.sort_order,
            visible: m.visible,
        }
    }
}
