//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the identity verifier, configuration, and the infrastructure pools
//! used by readiness checks.

use std::sync::Arc;

use scribe_cache::SharedRedisPool;
use scribe_common::{AppConfig, IdentityVerifier};
use scribe_db::PgPool;
use scribe_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    verifier: Arc<IdentityVerifier>,
    config: Arc<AppConfig>,
    db_pool: PgPool,
    redis_pool: SharedRedisPool,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        verifier: IdentityVerifier,
        config: AppConfig,
        db_pool: PgPool,
        redis_pool: SharedRedisPool,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            verifier: Arc::new(verifier),
            config: Arc::new(config),
            db_pool,
            redis_pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the identity verifier
    pub fn verifier(&self) -> &IdentityVerifier {
        &self.verifier
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the PostgreSQL pool (readiness checks)
    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }

    /// Get the Redis pool (readiness checks)
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
