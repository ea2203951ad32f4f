/// Task mutations: finish and delete
///
/// Both operations resolve the id first and return an explicit 404 when the
/// task does not exist — operating on a missing record is never undefined.
/// When the ownership policy is on, mutating a task owned by someone else is
/// rejected with 403; owner-less tasks stay mutable by anyone.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use huelist_shared::models::todo::Todo;

use crate::app::AppState;
use crate::error::{PageError, PageResult};
use crate::session::AuthSession;

fn check_ownership(state: &AppState, auth: &AuthSession, todo: &Todo) -> PageResult<()> {
    if !state.enforce_ownership() {
        return Ok(());
    }

    match todo.author_id {
        None => Ok(()),
        Some(author_id) if auth.user.as_ref().map(|u| u.id) == Some(author_id) => Ok(()),
        Some(_) => Err(PageError::Forbidden(
            "This task belongs to another user".to_string(),
        )),
    }
}

/// Marks a task finished, then redirects to `/`
///
/// Idempotent: finishing an already-finished task is a no-op.
pub async fn finish(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<i64>,
) -> PageResult<Redirect> {
    let todo = Todo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("No task with id {}", id)))?;

    check_ownership(&state, &auth, &todo)?;

    // The row can vanish between lookup and update; both ways report not-found
    if !Todo::mark_finished(&state.db, id).await? {
        return Err(PageError::NotFound(format!("No task with id {}", id)));
    }

    Ok(Redirect::to("/"))
}

/// Deletes a task, then redirects to `/`
///
/// A repeated delete of the same id fails cleanly with 404.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<i64>,
) -> PageResult<Redirect> {
    let todo = Todo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("No task with id {}", id)))?;

    check_ownership(&state, &auth, &todo)?;

    if !Todo::delete(&state.db, id).await? {
        return Err(PageError::NotFound(format!("No task with id {}", id)));
    }

    Ok(Redirect::to("/"))
}
