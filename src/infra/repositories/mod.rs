//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod content_repository;
pub(crate) mod entities;
mod menu_repository;
mod portfolio_repository;
mod user_repository;

pub use content_repository::{ContentRepository, ContentStore};
pub use menu_repository::{MenuRepository, MenuStore};
pub use portfolio_repository::{PortfolioRepository, PortfolioStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use content_repository::MockContentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use menu_repository::MockMenuRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use portfolio_repository::MockPortfolioRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
