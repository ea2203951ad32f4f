//! # Huelist Shared Library
//!
//! This crate contains the data layer and business-logic primitives shared by
//! the Huelist web application.
//!
//! ## Module Organization
//!
//! - `models`: Database models (users, todos) and their CRUD operations
//! - `auth`: Password hashing and verification
//! - `db`: SQLite connection pool and embedded migrations
//! - `palette`: The fixed task color palette and layout-hint helpers

pub mod auth;
pub mod db;
pub mod models;
pub mod palette;

/// Current version of the Huelist shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
