//! Pillar point entity. Two parent hops away from its portfolio.

use sea_orm::entity::prelude::*;

use crate::domain::content::PillarPoint;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pillar_points")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pillar_id: Uuid,
    pub text: String,
    pub sort_order: i32,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pillar::Entity",
        from = "Column::PillarId",
        to = "super::pillar::Column::Id",
        on_delete = "Cascade"
    )]
    Pillar,
}

impl Related<super::pillar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pillar.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PillarPoint {
    fn from(m: Model) -> Self {
        PillarPoint {
            id: m.id,
            pillar_id: m.pillar_id,
            text: m.text,
            order: m.sort_order,
            visible: m.visible,
        }
    }
}
