//! Application state

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::db::customers::Customers;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Customer data-access service
    pub customers: Customers,
}

impl AppState {
    /// Create a new AppState: connect the pool and bootstrap the schema
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.pg_max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::with_pool(pool))
    }

    /// Create state around an existing pool (no schema bootstrap)
    pub fn with_pool(pool: PgPool) -> Self {
        Self {
            customers: Customers::new(pool.clone()),
            pool,
        }
    }

    /// Drain the pool; called once on shutdown
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
