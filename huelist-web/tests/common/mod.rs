/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - An in-memory SQLite database with migrations applied
/// - A fully built router with its own session store
/// - Request helpers that carry the session cookie between calls

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use huelist_shared::db::migrations::run_migrations;
use huelist_shared::db::pool::{create_pool, DatabaseConfig};
use huelist_web::app::{build_router, AppState};
use huelist_web::config::{
    Config, DatabaseConfig as ConfigDatabase, ServerConfig, SessionConfig, TaskPolicy,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Test context containing the database pool and the application router
pub struct TestContext {
    pub db: SqlitePool,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context with the default (permissive) task policy
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_policy(false).await
    }

    /// Creates a test context with the ownership policy switched on
    pub async fn with_ownership_enforced() -> anyhow::Result<Self> {
        Self::with_policy(true).await
    }

    async fn with_policy(enforce_ownership: bool) -> anyhow::Result<Self> {
        // One connection: each sqlite::memory: connection is its own database
        let pool = create_pool(DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await?;

        run_migrations(&pool).await?;

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: ConfigDatabase {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            session: SessionConfig {
                secret: "integration-test-secret-key-0123456789abcdef".to_string(),
            },
            tasks: TaskPolicy { enforce_ownership },
        };

        let state = AppState::new(pool.clone(), config);
        let app = build_router(state);

        Ok(Self { db: pool, app })
    }

    /// Sends a GET request, optionally with a session cookie
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.send("GET", uri, None, cookie).await
    }

    /// Sends a form POST, optionally with a session cookie
    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        self.send("POST", uri, Some(body), cookie).await
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<&str>,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("Request should build"),
            None => builder.body(Body::empty()).expect("Request should build"),
        };

        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("Request should be handled")
    }

    /// Registers a user and returns the established session cookie
    pub async fn register(&self, email: &str, password: &str, username: &str) -> String {
        let response = self
            .post_form(
                "/register",
                &format!("email={}&password={}&username={}", email, password, username),
                None,
            )
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/"));
        session_cookie(&response).expect("Registration should establish a session")
    }

    /// Counts rows in the todos table
    pub async fn todo_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&self.db)
            .await
            .expect("Count should succeed")
    }
}

/// Extracts the session cookie pair from a response, if one was set
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).to_string())
}

/// Returns the Location header of a redirect response
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// Reads a response body to a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Body should be readable");
    String::from_utf8_lossy(&bytes).to_string()
}
