/// Task list page
///
/// `GET /` renders the current user's tasks (or an empty anonymous list);
/// `POST /` adds a task owned by the session user from the form field `todo`
/// and redirects back to `/`.

use axum::{extract::State, response::Redirect, Form};
use huelist_shared::models::todo::{CreateTodo, Todo};
use huelist_shared::palette;
use maud::Markup;
use serde::Deserialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::PageResult;
use crate::session::AuthSession;
use crate::views;

/// Inline add form on the task list
#[derive(Debug, Deserialize, Validate)]
pub struct NewTodoForm {
    /// Task description
    #[validate(length(min = 1, message = "A task description is required"))]
    pub todo: String,
}

/// Renders the task list for the current user
///
/// Anonymous visitors see an empty list rather than an error. The column
/// count handed to the renderer cycles 1..4 with the task count.
pub async fn index(State(state): State<AppState>, auth: AuthSession) -> PageResult<Markup> {
    let flashes = auth.take_flashes().await?;

    let todos = match &auth.user {
        Some(user) => Todo::list_for_author(&state.db, user.id).await?,
        None => Vec::new(),
    };

    let columns = palette::column_hint(todos.len());
    Ok(views::index_page(auth.user.as_ref(), &todos, columns, &flashes))
}

/// Adds a task owned by the session user, then redirects to `/`
///
/// A blank description flashes a notice and re-prompts; an anonymous caller
/// is sent to the login page instead of creating an unattributable row.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthSession,
    Form(form): Form<NewTodoForm>,
) -> PageResult<Redirect> {
    let Some(user) = &auth.user else {
        auth.flash("Log in to add tasks to your list.").await?;
        return Ok(Redirect::to("/login"));
    };

    if form.validate().is_err() {
        auth.flash("A task description is required.").await?;
        return Ok(Redirect::to("/"));
    }

    Todo::create(
        &state.db,
        CreateTodo {
            description: form.todo,
            author_id: Some(user.id),
        },
    )
    .await?;

    Ok(Redirect::to("/"))
}
