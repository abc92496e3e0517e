//! SQLite persistence layer.
//!
//! Implements the repository traits from `chatforge-core` using sqlx with
//! split read/write pools in WAL mode.

pub mod bot;
pub mod lead;
pub mod message;
pub mod pool;
