/// Integration tests for the database layer
///
/// These run against in-memory SQLite databases, so no external services
/// are required.

use huelist_shared::db::migrations::run_migrations;
use huelist_shared::db::pool::{create_pool, health_check, DatabaseConfig};

fn in_memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_pool_success() {
    let pool = create_pool(in_memory_config())
        .await
        .expect("Pool should connect");

    health_check(&pool).await.expect("Health check should pass");
}

#[tokio::test]
async fn test_create_pool_with_invalid_url() {
    let config = DatabaseConfig {
        url: "not-a-database-url".to_string(),
        ..Default::default()
    };

    let result = create_pool(config).await;
    assert!(result.is_err(), "Should fail with an invalid database URL");
}

#[tokio::test]
async fn test_migrations_apply_and_are_idempotent() {
    let pool = create_pool(in_memory_config())
        .await
        .expect("Pool should connect");

    run_migrations(&pool).await.expect("Migrations should run");
    run_migrations(&pool)
        .await
        .expect("Re-running migrations must be a no-op");

    let tables: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&pool)
            .await
            .expect("Table listing should work");

    let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
    assert!(names.contains(&"users"));
    assert!(names.contains(&"todos"));
}

#[tokio::test]
async fn test_foreign_keys_are_enforced() {
    let pool = create_pool(in_memory_config())
        .await
        .expect("Pool should connect");
    run_migrations(&pool).await.expect("Migrations should run");

    let result = sqlx::query(
        "INSERT INTO todos (description, finished, color, created_on, author_id)
         VALUES ('dangling', 0, 'x', 'June 05, 2024', 999)",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "author_id must reference an existing user");
}
