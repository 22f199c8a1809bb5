//! Infrastructure layer: database, repositories, render cache.

pub mod db;
pub mod repositories;
pub mod revalidate;

pub use db::Database;
pub use revalidate::{NoopRevalidator, RedisRevalidator, Revalidator};

#[cfg(any(test, feature = "test-utils"))]
pub use revalidate::MockRevalidator;
