//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, Revalidator};
use crate::services::{ServiceContainer, Services};

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceContainer>,
    pub database: Arc<Database>,
    pub revalidator: Arc<dyn Revalidator>,
    pub config: Config,
}

impl AppState {
    /// Wire the full application state from infrastructure handles.
    pub fn from_config(
        database: Arc<Database>,
        revalidator: Arc<dyn Revalidator>,
        config: Config,
    ) -> Self {
        let services = Arc::new(Services::from_connection(
            database.get_connection(),
            config.clone(),
            revalidator.clone(),
        ));

        Self {
            services,
            database,
            revalidator,
            config,
        }
    }

    /// State with manually injected services, used by handler tests.
    pub fn new(
        services: Arc<dyn ServiceContainer>,
        database: Arc<Database>,
        revalidator: Arc<dyn Revalidator>,
        config: Config,
    ) -> Self {
        Self {
            services,
            database,
            revalidator,
            config,
        }
    }
}
