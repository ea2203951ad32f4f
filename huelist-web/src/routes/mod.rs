/// Page and form handlers
///
/// This module contains all route handlers organized by page:
///
/// - `home`: task list and the inline owned-task add form
/// - `add`: the structured add form (creates owner-less tasks)
/// - `auth`: register, login, logout
/// - `todos`: finish and delete mutations

pub mod add;
pub mod auth;
pub mod home;
pub mod todos;
