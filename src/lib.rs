//! Portfolio platform: a multi-tenant portfolio CMS.
//!
//! Each registered user owns exactly one portfolio whose sections are
//! instances of a platform-wide menu catalog. Owners edit content and
//! menu layout in an admin surface, submit for review, and super-admins
//! approve (publishing a snapshot of menu visibility and order) or
//! reject with a reason. Published portfolios are served publicly by
//! slug. Super-admins manage the catalog and accounts, and may
//! impersonate a portfolio read-only.
//!
//! # Layers
//!
//! - **cli** / **commands**: command-line entry points
//! - **config**: environment configuration and constants
//! - **domain**: entities, the publication state machine, scope
//!   resolution and the ownership guard, menu and block rules
//! - **services**: use cases behind mockable traits
//! - **infra**: database, repositories, migrations and the render
//!   cache revalidator
//! - **api**: HTTP handlers, middleware and routes
//! - **types**: shared response envelopes
//! - **errors**: centralized error handling

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

pub use api::AppState;
pub use config::Config;
pub use domain::{AdminUser, Password, UserRole};
pub use errors::{AppError, AppResult};
