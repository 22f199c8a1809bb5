//! Principle entity. Owned through its about content.

use sea_orm::entity::prelude::*;

use crate::domain::content::Principle;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "principles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub about_content_id: Uuid,
    pub title: String,
    pub body: String,
    pub sort_order: i32,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::about_content::Entity",
        from = "Column::AboutContentId",
        to = "super::about_content::Column::Id",
        on_delete = "Cascade"
    )]
    AboutContent,
}

impl Related<super::about_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AboutContent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Principle {
    fn from(m: Model) -> Self {
        Principle {
            id: m.id,
            about_content_id: m.about_content_id,
            title: m.title,
            body: m.body,
            order: m.sort_order,
            visible: m.visible,
        }
    }
}
