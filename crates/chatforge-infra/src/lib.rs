//! Infrastructure adapters for Chatforge.
//!
//! Implements the repository and authorization ports from `chatforge-core`
//! with SQLite (sqlx) and provides config loading and data-dir resolution.

pub mod auth;
pub mod config;
pub mod data_dir;
pub mod sqlite;
