//! Application services layer: use cases and business logic.
//!
//! Services orchestrate domain rules and repositories to fulfil the
//! admin and public use cases. Each one is a trait so handlers depend
//! on abstractions and tests can mock the whole graph.

mod auth_service;
pub mod container;
mod content_service;
mod menu_service;
mod provisioning;
mod public_service;
mod review_service;
mod session_service;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{
    AuthService, Authenticator, Claims, ImpersonationClaims, TokenResponse,
};
pub use content_service::{ContentManager, ContentService};
pub use menu_service::{CreatePlatformMenu, MenuManager, MenuService, UpdatePlatformMenu};
pub use public_service::{
    PublicAbout, PublicArchitecture, PublicPillar, PublicPortfolio, PublicSection, PublicService,
    PublicSite, PublicSkillGroup, SectionContent,
};
pub use review_service::{ReviewService, Reviewer};
pub use session_service::{SessionManager, SessionService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use content_service::MockContentService;
#[cfg(any(test, feature = "test-utils"))]
pub use menu_service::MockMenuService;
#[cfg(any(test, feature = "test-utils"))]
pub use public_service::MockPublicService;
#[cfg(any(test, feature = "test-utils"))]
pub use review_service::MockReviewService;
#[cfg(any(test, feature = "test-utils"))]
pub use session_service::MockSessionService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
