//! # Huelist Web Application
//!
//! Server-rendered multi-user to-do list: users register, log in, and manage a
//! personal list of tasks, each stamped with a gradient color from a fixed
//! palette.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: Page and form handlers
//! - `session`: Session-bound authentication context and flash notices
//! - `views`: maud page templates

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod views;
