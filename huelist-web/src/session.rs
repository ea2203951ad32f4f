/// Session-bound authentication context
///
/// The "current user" is never ambient state: every handler that needs it
/// takes an [`AuthSession`] extractor, which resolves the user bound to the
/// request's session (if any) up front and carries the session handle for
/// login, logout, and flash notices.
///
/// # Session contents
///
/// - `user_id`: id of the authenticated user, absent when anonymous
/// - `flash`: queued one-shot notices, drained on the next page render

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use huelist_shared::models::user::User;
use tower_sessions::Session;

use crate::app::AppState;
use crate::error::PageError;

const USER_ID_KEY: &str = "user_id";
const FLASH_KEY: &str = "flash";

/// Per-request authentication context
///
/// Extracted from the session layer; `user` is `None` for anonymous requests.
pub struct AuthSession {
    /// The underlying session handle
    pub session: Session,

    /// The authenticated user, if the session is logged in
    pub user: Option<User>,
}

impl AuthSession {
    /// Binds the session to `user`, establishing a login
    pub async fn login(&mut self, user: &User) -> Result<(), PageError> {
        self.session.insert(USER_ID_KEY, user.id).await?;
        self.user = Some(user.clone());
        Ok(())
    }

    /// Tears down the session unconditionally
    ///
    /// Always succeeds from the caller's point of view: an anonymous session
    /// flushes to nothing.
    pub async fn logout(&mut self) -> Result<(), PageError> {
        self.session.flush().await?;
        self.user = None;
        Ok(())
    }

    /// Queues a one-shot notice shown on the next rendered page
    pub async fn flash(&self, message: &str) -> Result<(), PageError> {
        let mut pending: Vec<String> = self.session.get(FLASH_KEY).await?.unwrap_or_default();
        pending.push(message.to_string());
        self.session.insert(FLASH_KEY, pending).await?;
        Ok(())
    }

    /// Drains and returns all queued flash notices
    pub async fn take_flashes(&self) -> Result<Vec<String>, PageError> {
        Ok(self
            .session
            .remove::<Vec<String>>(FLASH_KEY)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = PageError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| PageError::Internal(msg.to_string()))?;

        let user = match session.get::<i64>(USER_ID_KEY).await? {
            Some(id) => User::find_by_id(&state.db, id).await?,
            None => None,
        };

        Ok(Self { session, user })
    }
}
