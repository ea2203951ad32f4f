/// Structured add-task form
///
/// `GET /add` renders the form; `POST /add` creates an owner-less task and
/// redirects to `/`. The missing owner is deliberate: this is the original
/// application's public add path, preserved as-is.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use huelist_shared::models::todo::{CreateTodo, Todo};
use maud::Markup;
use serde::Deserialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::PageResult;
use crate::views;

/// The structured add form
#[derive(Debug, Deserialize, Validate)]
pub struct AddTodoForm {
    /// Task description
    #[validate(length(min = 1, message = "A task description is required"))]
    pub todo: String,
}

/// Renders the add form
pub async fn form() -> Markup {
    views::add_page(None)
}

/// Accepts the add form
///
/// On a blank description the form is re-shown with the validation message
/// and nothing is persisted.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<AddTodoForm>,
) -> PageResult<Response> {
    if form.validate().is_err() {
        return Ok(views::add_page(Some("A task description is required")).into_response());
    }

    Todo::create(
        &state.db,
        CreateTodo {
            description: form.todo,
            author_id: None,
        },
    )
    .await?;

    Ok(Redirect::to("/").into_response())
}
