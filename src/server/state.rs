//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Application configuration (secrets, site URL, limits)
//! - Thesis file storage rooted at the static directory

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{config::Config, storage::ThesisStorage};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Config>` is a reference-counted pointer
/// - `ThesisStorage` only holds its root path
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// Store for uploaded thesis files under the static directory.
    pub storage: ThesisStorage,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let storage = ThesisStorage::new(config.static_dir.clone());

        Self {
            db,
            config: Arc::new(config),
            storage,
        }
    }
}
