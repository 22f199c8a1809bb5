//! Render cache invalidation.
//!
//! Published portfolio pages are rendered from cached snapshots keyed by
//! path. Any admin write that can change rendered output calls into the
//! revalidator so the next public read re-renders fresh data.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use crate::config::{Config, CACHE_PREFIX_RENDER};
use crate::errors::{AppError, AppResult};

/// Invalidation hook for the public render cache.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait Revalidator: Send + Sync {
    /// Drop the cached render for a single path.
    async fn invalidate_path(&self, path: &str) -> AppResult<()>;

    /// Drop every cached render belonging to a portfolio slug.
    async fn invalidate_portfolio(&self, slug: &str) -> AppResult<()>;

    /// Drop every cached render. Used after platform-wide menu changes
    /// that affect all published pages at once.
    async fn invalidate_all(&self) -> AppResult<()>;

    /// Backend connectivity check for the health endpoint.
    async fn ping(&self) -> AppResult<()>;
}

/// Redis-backed revalidator.
#[derive(Clone)]
pub struct RedisRevalidator {
    connection: ConnectionManager,
}

impl RedisRevalidator {
    /// Create a revalidator and connect to Redis.
    ///
    /// # Panics
    /// Panics if Redis connection fails.
    pub async fn connect(config: &Config) -> Self {
        let client =
            Client::open(config.redis_url.as_str()).expect("Failed to create Redis client");

        let connection = ConnectionManager::new(client)
            .await
            .expect("Failed to connect to Redis");

        tracing::info!("Redis revalidator connected");

        Self { connection }
    }

    /// Try to connect, returning an error instead of panicking.
    pub async fn try_connect(config: &Config) -> Result<Self, RedisError> {
        let client = Client::open(config.redis_url.as_str())?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    async fn delete_matching(&self, pattern: &str) -> AppResult<u64> {
        let mut conn = self.connection.clone();
        let keys: Vec<String> = conn.keys(pattern).await.map_err(cache_error)?;

        if keys.is_empty() {
            return Ok(0);
        }

        let count = keys.len() as u64;

        // UNLINK is non-blocking (Redis 4.0+); fall back to DEL.
        let unlinked: i64 = redis::cmd("UNLINK")
            .arg(&keys)
            .query_async(&mut conn)
            .await
            .unwrap_or(0);

        if unlinked == 0 {
            let _: i64 = conn.del(&keys).await.map_err(cache_error)?;
        }

        Ok(count)
    }
}

#[async_trait]
impl Revalidator for RedisRevalidator {
    async fn invalidate_path(&self, path: &str) -> AppResult<()> {
        let key = format!("{}{}", CACHE_PREFIX_RENDER, path);
        let mut conn = self.connection.clone();
        let _: () = conn.del(&key).await.map_err(cache_error)?;
        tracing::debug!(path = %path, "Render cache invalidated");
        Ok(())
    }

    async fn invalidate_portfolio(&self, slug: &str) -> AppResult<()> {
        let pattern = format!("{}{}*", CACHE_PREFIX_RENDER, slug);
        let count = self.delete_matching(&pattern).await?;
        tracing::debug!(slug = %slug, keys = count, "Portfolio render cache invalidated");
        Ok(())
    }

    async fn invalidate_all(&self) -> AppResult<()> {
        let pattern = format!("{}*", CACHE_PREFIX_RENDER);
        let count = self.delete_matching(&pattern).await?;
        tracing::debug!(keys = count, "Full render cache invalidated");
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;
        Ok(())
    }
}

/// No-op revalidator for deployments without Redis.
pub struct NoopRevalidator;

#[async_trait]
impl Revalidator for NoopRevalidator {
    async fn invalidate_path(&self, _path: &str) -> AppResult<()> {
        Ok(())
    }

    async fn invalidate_portfolio(&self, _slug: &str) -> AppResult<()> {
        Ok(())
    }

    async fn invalidate_all(&self) -> AppResult<()> {
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::internal(format!("Cache error: {}", e))
}
