use crate::infra::app_config::AppConfig;
use crate::infra::db::Database;
use anyhow::Result;
use std::sync::Arc;

/// Shared state for the registration API.
pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
}

impl AppState {
    /// Opens the database the configuration points at.
    pub fn new(config: AppConfig) -> Result<Arc<Self>> {
        let db = match &config.db_path {
            Some(path) => Database::open_at(path.clone())?,
            None => Database::open()?,
        };
        Ok(Arc::new(Self { db, config }))
    }

    /// State backed by an in-memory database (useful for testing).
    pub fn in_memory() -> Result<Arc<Self>> {
        Ok(Arc::new(Self {
            db: Database::open_in_memory()?,
            config: AppConfig::default(),
        }))
    }
}
