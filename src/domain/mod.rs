//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns:
//! users and roles, the portfolio publication state machine, admin
//! scope resolution and the ownership guard, the menu model with its
//! block reconciliation planner, and the content entity families.

pub mod content;
pub mod limits;
pub mod menu;
pub mod password;
pub mod portfolio;
pub mod scope;
pub mod user;

pub use menu::{
    plan_block_reconciliation, BlockData, BlockLink, BlockReconciliation, MenuBlock, PlatformMenu,
    PortfolioMenu, PortfolioMenuView, SectionType,
};
pub use password::Password;
pub use portfolio::{
    check_reviewable, validate_slug, Portfolio, PortfolioResponse, PortfolioStatus,
};
pub use scope::{
    assert_super_admin, assert_writable, resolve_admin_scope, Actor, AdminScope, RequestContext,
};
pub use user::{AdminUser, CreateUser, UpdateUser, UserResponse, UserRole};
