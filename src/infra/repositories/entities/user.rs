//! Admin user entity.

use sea_orm::entity::prelude::*;

use crate::domain::{AdminUser, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::portfolio::Entity")]
    Portfolio,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AdminUser {
    fn from(m: Model) -> Self {
        AdminUser {
            id: m.id,
            email: m.email,
            password_hash: m.password_hash,
            name: m.name,
            role: UserRole::from(m.role.as_str()),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
