//! Theme persistence: row models, Postgres repositories, the
//! [`ThemeStore`] seam and the [`ThemeCatalog`] that enforces the theme
//! lifecycle rules on top of it.

use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use catalog::{ActiveTheme, ThemeCatalog};
pub use error::ThemeError;
pub use memory::MemoryThemeStore;
pub use store::{PgThemeStore, ThemeStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
