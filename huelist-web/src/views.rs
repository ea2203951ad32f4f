/// maud page templates
///
/// Small server-rendered pages: the task list, the structured add form, the
/// login and register forms, and a generic error page. Each todo card carries
/// its stored palette token as an inline style; the column count for the list
/// is the layout hint computed by the caller.

use axum::http::StatusCode;
use huelist_shared::models::todo::Todo;
use huelist_shared::models::user::User;
use maud::{html, Markup, DOCTYPE};

fn layout(title: &str, user: Option<&User>, flashes: &[String], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                nav {
                    a href="/" { "Huelist" }
                    " | "
                    a href="/add" { "Add" }
                    " | "
                    @if let Some(user) = user {
                        span { "Signed in as " (user.name) }
                        " | "
                        a href="/logout" { "Log out" }
                    } @else {
                        a href="/login" { "Log in" }
                        " | "
                        a href="/register" { "Register" }
                    }
                }
                @for flash in flashes {
                    p.flash role="alert" { (flash) }
                }
                main {
                    (content)
                }
            }
        }
    }
}

/// The task list for the current user, laid out over `columns` columns
pub fn index_page(
    user: Option<&User>,
    todos: &[Todo],
    columns: usize,
    flashes: &[String],
) -> Markup {
    layout(
        "My TODO List",
        user,
        flashes,
        html! {
            h1 { "My TODO List" }
            form method="post" action="/" {
                input type="text" name="todo" placeholder="What needs doing?";
                button type="submit" { "Add" }
            }
            div.todo-grid style=(format!("columns: {};", columns)) {
                @for todo in todos {
                    div.todo-card style=(todo.color) {
                        @if todo.finished {
                            s { (todo.description) }
                        } @else {
                            span { (todo.description) }
                        }
                        p.date { (todo.created_on) }
                        p {
                            @if !todo.finished {
                                a href=(format!("/finished/{}", todo.id)) { "Finish" }
                                " "
                            }
                            a href=(format!("/delete/{}", todo.id)) { "Delete" }
                        }
                    }
                }
            }
        },
    )
}

/// The structured add-task form (creates an owner-less task)
pub fn add_page(error: Option<&str>) -> Markup {
    layout(
        "Add a TODO",
        None,
        &[],
        html! {
            h1 { "Add a TODO" }
            @if let Some(error) = error {
                p.error role="alert" { (error) }
            }
            form method="post" action="/add" {
                label for="todo" { "Add new TODO" }
                input type="text" name="todo" id="todo";
                button type="submit" { "Submit" }
            }
        },
    )
}

/// The login form
pub fn login_page(flashes: &[String]) -> Markup {
    layout(
        "Log in",
        None,
        flashes,
        html! {
            h1 { "Log in" }
            form method="post" action="/login" {
                label for="email" { "Email" }
                input type="text" name="email" id="email";
                label for="password" { "Password" }
                input type="password" name="password" id="password";
                button type="submit" { "Log in" }
            }
            p { "No account yet? " a href="/register" { "Register" } }
        },
    )
}

/// The registration form
pub fn register_page(flashes: &[String]) -> Markup {
    layout(
        "Register",
        None,
        flashes,
        html! {
            h1 { "Register" }
            form method="post" action="/register" {
                label for="email" { "Email" }
                input type="text" name="email" id="email";
                label for="password" { "Password" }
                input type="password" name="password" id="password";
                label for="username" { "Username" }
                input type="text" name="username" id="username";
                button type="submit" { "Sign me up" }
            }
        },
    )
}

/// Generic error page used by the `PageError` response mapping
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        status.canonical_reason().unwrap_or("Error"),
        None,
        &[],
        html! {
            h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p { (message) }
            p { a href="/" { "Back to the list" } }
        },
    )
}
