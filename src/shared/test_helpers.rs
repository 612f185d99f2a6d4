use sqlx::SqlitePool;

use crate::core::config::DatabaseConfig;
use crate::core::database::{create_pool, run_migrations};

/// Fresh in-memory database with the schema applied and foreign keys enforced
pub async fn test_pool() -> SqlitePool {
    test_pool_with_foreign_keys(true).await
}

/// Fresh in-memory database built through the production pool setup
///
/// Each in-memory connection is its own database, so the pool is pinned to a
/// single connection.
pub async fn test_pool_with_foreign_keys(foreign_keys: bool) -> SqlitePool {
    let pool = create_pool(&memory_config(foreign_keys)).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub fn memory_config(foreign_keys: bool) -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout_secs: 5,
        idle_timeout_secs: 3600,
        max_lifetime_secs: 3600,
        foreign_keys,
    }
}
