/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use huelist_web::{app::AppState, config::Config};
/// use huelist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = huelist_web::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_sessions::cookie::Key;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Whether the ownership policy guards task mutations
    pub fn enforce_ownership(&self) -> bool {
        self.config.tasks.enforce_ownership
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Route table
///
/// ```text
/// GET|POST /               task list / add an owned task
/// GET|POST /add            structured form, creates an owner-less task
/// GET|POST /finished/:id   mark a task finished
/// GET|POST /delete/:id     delete a task
/// GET|POST /register       account creation
/// GET|POST /login          session establishment
/// GET      /logout         session teardown
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. Sessions (tower-sessions, signed cookies keyed from SECRET_KEY)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_signed(Key::derive_from(state.config.session.secret.as_bytes()));

    Router::new()
        .route("/", get(routes::home::index).post(routes::home::create))
        .route("/add", get(routes::add::form).post(routes::add::submit))
        .route(
            "/finished/:id",
            get(routes::todos::finish).post(routes::todos::finish),
        )
        .route(
            "/delete/:id",
            get(routes::todos::delete).post(routes::todos::delete),
        )
        .route(
            "/register",
            get(routes::auth::register_page).post(routes::auth::register),
        )
        .route(
            "/login",
            get(routes::auth::login_page).post(routes::auth::login),
        )
        .route("/logout", get(routes::auth::logout))
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
