//! Database access for the portfolio backend.
//!
//! Owns the SQLite connection pool, schema migrations, and the model +
//! repository layers. Repositories are unit structs with static async
//! methods taking an explicit `&DbPool`; nothing in this crate holds an
//! ambient connection.

pub mod models;
pub mod repositories;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Shared connection pool handle, constructed once at process start and
/// passed into every component that touches the store.
pub type DbPool = SqlitePool;

/// Connect to the database, creating the file if it does not exist.
///
/// Foreign keys are off by default in SQLite, so they are enabled here;
/// the content tables rely on them for image references.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    Ok(pool)
}

/// Cheap connectivity probe used at startup and by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`. Idempotent.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
