//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use sqlx::PgPool;
use tokio::sync::OnceCell;
use tracing::warn;

use crate::{
    admission::{AdmissionEvaluator, ContestStore, PgContestStore},
    config::Config,
    constants::{
        REDIS_CONNECT_TIMEOUT_MS, REDIS_RECONNECT_COOLDOWN_SECS, REDIS_RESPONSE_TIMEOUT_MS,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Redis client; the managed connection is opened on first use
    redis: redis::Client,
    redis_conn: OnceCell<ConnectionManager>,
    /// Last failed connect; no new attempt until the cooldown has passed
    redis_failed_at: Mutex<Option<Instant>>,

    /// Data access used by contest admission
    store: Arc<dyn ContestStore>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state backed by Postgres
    pub fn new(db: PgPool, redis: redis::Client, config: Config) -> Self {
        let store = Arc::new(PgContestStore::new(db.clone()));
        Self::with_store(db, redis, config, store)
    }

    /// Create application state with a custom contest store
    pub fn with_store(
        db: PgPool,
        redis: redis::Client,
        config: Config,
        store: Arc<dyn ContestStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                redis,
                redis_conn: OnceCell::new(),
                redis_failed_at: Mutex::new(None),
                store,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a clone of the Redis connection manager, connecting on first call.
    ///
    /// A failed connect is not retried until the cooldown has passed, so
    /// callers get an error right away while Redis is down.
    pub async fn redis(&self) -> redis::RedisResult<ConnectionManager> {
        if let Some(conn) = self.inner.redis_conn.get() {
            return Ok(conn.clone());
        }

        if self.redis_cooling_down() {
            return Err(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "Redis unavailable, reconnect pending",
            )));
        }

        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(0)
            .set_connection_timeout(Duration::from_millis(REDIS_CONNECT_TIMEOUT_MS))
            .set_response_timeout(Duration::from_millis(REDIS_RESPONSE_TIMEOUT_MS));

        let result = self
            .inner
            .redis_conn
            .get_or_try_init(|| ConnectionManager::new_with_config(self.inner.redis.clone(), config))
            .await;

        match result {
            Ok(conn) => Ok(conn.clone()),
            Err(e) => {
                warn!(error = %e, "Redis connect failed");
                *self.redis_failed_at() = Some(Instant::now());
                Err(e)
            }
        }
    }

    fn redis_failed_at(&self) -> std::sync::MutexGuard<'_, Option<Instant>> {
        self.inner
            .redis_failed_at
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn redis_cooling_down(&self) -> bool {
        self.redis_failed_at().is_some_and(|failed_at| {
            failed_at.elapsed() < Duration::from_secs(REDIS_RECONNECT_COOLDOWN_SECS)
        })
    }

    /// Get the contest store
    pub fn store(&self) -> &Arc<dyn ContestStore> {
        &self.inner.store
    }

    /// Admission evaluator over the configured store
    pub fn admission(&self) -> AdmissionEvaluator {
        AdmissionEvaluator::new(Arc::clone(&self.inner.store))
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
