/// Authentication pages
///
/// Registration, login, and logout. Failures are recovered locally: the
/// caller gets a flash notice and a redirect, never an error page. The only
/// hard validation is field presence — no email format checking.

use axum::{extract::State, response::Redirect, Form};
use huelist_shared::auth::password;
use huelist_shared::models::user::{CreateUser, User};
use maud::Markup;
use serde::Deserialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::PageResult;
use crate::session::AuthSession;
use crate::views;

/// Registration form fields
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    /// Email address (presence-only validation)
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Display name
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

/// Login form fields
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Renders the registration form
pub async fn register_page(auth: AuthSession) -> PageResult<Markup> {
    let flashes = auth.take_flashes().await?;
    Ok(views::register_page(&flashes))
}

/// Creates an account
///
/// A duplicate email is rejected before any row is created: the caller is
/// flashed and redirected to the login page. Otherwise the password is
/// hashed, the user row inserted, and the session established.
pub async fn register(
    State(state): State<AppState>,
    mut auth: AuthSession,
    Form(form): Form<RegisterForm>,
) -> PageResult<Redirect> {
    if form.validate().is_err() {
        auth.flash("Email, password, and username are all required.")
            .await?;
        return Ok(Redirect::to("/register"));
    }

    if User::find_by_email(&state.db, &form.email).await?.is_some() {
        auth.flash("You've already signed up with that email, log in instead!")
            .await?;
        return Ok(Redirect::to("/login"));
    }

    let password_hash = password::hash_password(&form.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            email: form.email,
            password_hash,
            name: form.username,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Registered new user");
    auth.login(&user).await?;

    Ok(Redirect::to("/"))
}

/// Renders the login form
pub async fn login_page(auth: AuthSession) -> PageResult<Markup> {
    let flashes = auth.take_flashes().await?;
    Ok(views::login_page(&flashes))
}

/// Verifies credentials and establishes a session
///
/// Unknown email and wrong password are distinguished in the notice text
/// only; both send the caller back to the login form.
pub async fn login(
    State(state): State<AppState>,
    mut auth: AuthSession,
    Form(form): Form<LoginForm>,
) -> PageResult<Redirect> {
    let Some(user) = User::find_by_email(&state.db, &form.email).await? else {
        auth.flash("That email does not exist, please try again.")
            .await?;
        return Ok(Redirect::to("/login"));
    };

    if !password::verify_password(&form.password, &user.password_hash)? {
        auth.flash("Email or password is incorrect.").await?;
        return Ok(Redirect::to("/login"));
    }

    tracing::info!(user_id = user.id, "User logged in");
    auth.login(&user).await?;

    Ok(Redirect::to("/"))
}

/// Tears down the session unconditionally and redirects to the task list
pub async fn logout(mut auth: AuthSession) -> PageResult<Redirect> {
    auth.logout().await?;
    Ok(Redirect::to("/"))
}
