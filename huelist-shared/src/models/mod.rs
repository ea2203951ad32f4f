/// Database models for Huelist
///
/// This module contains the two persisted entities and their CRUD operations.
///
/// # Models
///
/// - `user`: Registered accounts (unique email, hashed password, display name)
/// - `todo`: To-do items owned by a user (or owner-less via the public add form)
///
/// # Example
///
/// ```no_run
/// use huelist_shared::models::user::{User, CreateUser};
/// use huelist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     email: "user@example.com".to_string(),
///     password_hash: "$pbkdf2-sha256$...".to_string(),
///     name: "John Doe".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod todo;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::migrations::run_migrations;
    use crate::db::pool::{create_pool, DatabaseConfig};
    use sqlx::SqlitePool;

    /// Fresh in-memory database with the schema applied.
    ///
    /// One connection only: each `sqlite::memory:` connection is its own
    /// database, so a larger pool would split state across connections.
    pub async fn test_pool() -> SqlitePool {
        let pool = create_pool(DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await
        .expect("In-memory pool should connect");

        run_migrations(&pool).await.expect("Migrations should run");
        pool
    }
}
