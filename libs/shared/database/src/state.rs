use std::sync::Arc;

use shared_config::AppConfig;

use crate::database::Database;

/// Router state: configuration plus the injected store handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Database,
}

impl AppState {
    pub fn new(config: AppConfig, db: Database) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}
