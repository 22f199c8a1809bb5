//! Service container: centralized access to every application service,
//! wired once at startup and shared behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AuthService, ContentService, MenuService, PublicService, ReviewService, SessionService,
    UserService,
};
use crate::config::Config;
use crate::infra::Revalidator;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn sessions(&self) -> Arc<dyn SessionService>;
    fn users(&self) -> Arc<dyn UserService>;
    fn menus(&self) -> Arc<dyn MenuService>;
    fn review(&self) -> Arc<dyn ReviewService>;
    fn content(&self) -> Arc<dyn ContentService>;
    fn public_site(&self) -> Arc<dyn PublicService>;
}

pub struct Services {
    auth_service: Arc<dyn AuthService>,
    session_service: Arc<dyn SessionService>,
    user_service: Arc<dyn UserService>,
    menu_service: Arc<dyn MenuService>,
    review_service: Arc<dyn ReviewService>,
    content_service: Arc<dyn ContentService>,
    public_service: Arc<dyn PublicService>,
}

impl Services {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        session_service: Arc<dyn SessionService>,
        user_service: Arc<dyn UserService>,
        menu_service: Arc<dyn MenuService>,
        review_service: Arc<dyn ReviewService>,
        content_service: Arc<dyn ContentService>,
        public_service: Arc<dyn PublicService>,
    ) -> Self {
        Self {
            auth_service,
            session_service,
            user_service,
            menu_service,
            review_service,
            content_service,
            public_service,
        }
    }

    /// Wire the full service graph from a database connection, the
    /// application config and a revalidator.
    pub fn from_connection(
        db: DatabaseConnection,
        config: Config,
        revalidator: Arc<dyn Revalidator>,
    ) -> Self {
        use super::{
            Authenticator, ContentManager, MenuManager, PublicSite, Reviewer, SessionManager,
            UserManager,
        };
        use crate::infra::repositories::{ContentStore, MenuStore, PortfolioStore, UserStore};

        let users = Arc::new(UserStore::new(db.clone()));
        let portfolios = Arc::new(PortfolioStore::new(db.clone()));
        let menus = Arc::new(MenuStore::new(db.clone()));
        let content = Arc::new(ContentStore::new(db));

        let auth_service: Arc<dyn AuthService> =
            Arc::new(Authenticator::new(users.clone(), menus.clone(), config));
        let session_service = Arc::new(SessionManager::new(
            auth_service.clone(),
            users.clone(),
            portfolios.clone(),
        ));
        let user_service = Arc::new(UserManager::new(
            users.clone(),
            portfolios.clone(),
            menus.clone(),
        ));
        let menu_service = Arc::new(MenuManager::new(
            menus.clone(),
            portfolios.clone(),
            revalidator.clone(),
        ));
        let review_service = Arc::new(Reviewer::new(portfolios.clone(), revalidator.clone()));
        let content_service = Arc::new(ContentManager::new(
            content.clone(),
            menus.clone(),
            portfolios.clone(),
            revalidator,
        ));
        let public_service = Arc::new(PublicSite::new(portfolios, menus, content));

        Self {
            auth_service,
            session_service,
            user_service,
            menu_service,
            review_service,
            content_service,
            public_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn menus(&self) -> Arc<dyn MenuService> {
        self.menu_service.clone()
    }

    fn review(&self) -> Arc<dyn ReviewService> {
        self.review_service.clone()
    }

    fn content(&self) -> Arc<dyn ContentService> {
        self.content_service.clone()
    }

    fn public_site(&self) -> Arc<dyn PublicService> {
        self.public_service.clone()
    }
}
