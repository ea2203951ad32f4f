/// Database migration runner
///
/// Migrations are embedded at compile time from the `migrations/` directory at
/// this crate's root and applied with sqlx's migration system. sqlx tracks
/// applied migrations in the `_sqlx_migrations` table, so re-running is safe.
///
/// # Example
///
/// ```no_run
/// use huelist_shared::db::pool::{create_pool, DatabaseConfig};
/// use huelist_shared::db::migrations::run_migrations;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: "sqlite:todos.db".to_string(),
///     ..Default::default()
/// })
/// .await?;
///
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if a migration file is malformed or fails to execute.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

// Integration tests live in tests/db_tests.rs
