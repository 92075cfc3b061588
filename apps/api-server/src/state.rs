//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::PostManager;
use posts_core::ports::PostStore;
use posts_infra::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
use posts_infra::{PostgresPostStore, database};

/// Which store backs the running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    #[cfg_attr(not(feature = "postgres"), allow(dead_code))]
    Postgres,
    Memory,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostManager,
    pub store: StoreKind,
}

impl AppState {
    pub fn with_store(store: Arc<dyn PostStore>, kind: StoreKind) -> Self {
        Self {
            posts: PostManager::new(store),
            store: kind,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match database::connect(config).await {
                Ok(conn) => Self::with_store(
                    Arc::new(PostgresPostStore::new(conn)),
                    StoreKind::Postgres,
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
            Self::in_memory()
        };

        tracing::info!(store = state.store.as_str(), "Application state initialized");
        state
    }

    fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryPostStore::new()), StoreKind::Memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_no_database_config_uses_memory_store() {
        let state = AppState::new(None).await;

        assert_eq!(state.store, StoreKind::Memory);
        assert!(state.posts.list().await.unwrap().is_empty());
    }
}
