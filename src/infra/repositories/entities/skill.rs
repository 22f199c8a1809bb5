//! Skill entity. Owned through its skill group.

use sea_orm::entity::prelude::*;

use crate::domain::content::Skill;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub skill_group_id: Uuid,
    pub name: String,
    pub level: Option<i32>,
    pub sort_order: i32,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::skill_group::Entity",
        from = "Column::SkillGroupId",
        to = "super::skill_group::Column::Id",
        on_delete = "Cascade"
    )]
    SkillGroup,
}

impl Related<super::skill_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Skill {
    fn from(m: Model) -> Self {
        Skill {
            id: m.id,
            skill_group_id: m.skill_group_id,
            name: m.name,
            level: m.level,
            order: m.sort_order,
            visible: m.visible,
        }
    }
}
