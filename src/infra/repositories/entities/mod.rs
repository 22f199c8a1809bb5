//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Cascade deletes declared here (and in the migration DDL) are an
//! explicit contract: deleting a portfolio removes its menus, blocks and
//! every content row; deleting a platform menu removes its instances.

pub mod about_content;
pub mod architecture_content;
pub mod experience;
pub mod hero_content;
pub mod menu_block;
pub mod person_info;
pub mod pillar;
pub mod pillar_point;
pub mod platform_menu;
pub mod portfolio;
pub mod portfolio_menu;
pub mod principle;
pub mod project;
pub mod skill;
pub mod skill_group;
pub mod user;
