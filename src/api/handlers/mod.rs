//! HTTP request handlers.

pub mod auth_handler;
pub mod content_handler;
pub mod impersonation_handler;
pub mod menu_handler;
pub mod public_handler;
pub mod review_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use content_handler::content_routes;
pub use impersonation_handler::session_routes;
pub use menu_handler::{block_routes, platform_menu_routes, portfolio_menu_routes};
pub use public_handler::public_routes;
pub use review_handler::{portfolio_routes, review_routes};
pub use user_handler::user_routes;
