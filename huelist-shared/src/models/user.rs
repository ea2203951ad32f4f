/// User model and database operations
///
/// A user is a registered account that owns zero or more todos. Users are
/// created on registration and never updated or deleted in the current scope.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     email TEXT NOT NULL UNIQUE,
///     password_hash TEXT NOT NULL,
///     name TEXT NOT NULL
/// );
/// ```
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
/// let user = User::create(&pool, CreateUser {
///     email: "user@example.com".to_string(),
///     password_hash: "$pbkdf2-sha256$...".to_string(),
///     name: "John Doe".to_string(),
/// })
/// .await?;
///
/// let found = User::find_by_email(&pool, "user@example.com").await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User model representing a registered account
///
/// Passwords are stored as PBKDF2-SHA256 PHC hashes, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (assigned by the database)
    pub id: i64,

    /// Email address, unique across all users
    pub email: String,

    /// PBKDF2-SHA256 password hash in PHC string format
    pub password_hash: String,

    /// Display name
    pub name: String,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Email address
    pub email: String,

    /// Password hash (NOT the plaintext password)
    pub password_hash: String,

    /// Display name
    pub name: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns an error if the email already exists (unique constraint
    /// violation) or the database is unreachable. Callers registering users
    /// should check [`User::find_by_email`] first so a duplicate registration
    /// is rejected before any row is attempted; the constraint is the backstop.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, name)
            VALUES (?1, ?2, ?3)
            RETURNING id, email, password_hash, name
            "#,
        )
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// Returns the user if found, `None` otherwise.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Finds a user by email address
    ///
    /// Returns the user if found, `None` otherwise.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Counts all users
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::test_pool;

    fn sample_user(email: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password_hash: "$pbkdf2-sha256$i=260000,l=32$fake$fake".to_string(),
            name: "Test User".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let pool = test_pool().await;

        let created = User::create(&pool, sample_user("a@x.com"))
            .await
            .expect("Create should succeed");
        assert!(created.id > 0);
        assert_eq!(created.email, "a@x.com");

        let found = User::find_by_email(&pool, "a@x.com")
            .await
            .expect("Lookup should succeed")
            .expect("User should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Test User");
    }

    #[tokio::test]
    async fn test_find_by_email_missing() {
        let pool = test_pool().await;

        let found = User::find_by_email(&pool, "nobody@x.com")
            .await
            .expect("Lookup should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let pool = test_pool().await;

        let found = User::find_by_id(&pool, 4242)
            .await
            .expect("Lookup should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = test_pool().await;

        User::create(&pool, sample_user("dup@x.com"))
            .await
            .expect("First create should succeed");

        let second = User::create(&pool, sample_user("dup@x.com")).await;
        assert!(second.is_err(), "Duplicate email must violate UNIQUE");

        let count = User::count(&pool).await.expect("Count should succeed");
        assert_eq!(count, 1, "No second row may be created");
    }
}
