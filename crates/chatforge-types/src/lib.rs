//! Shared domain types for Chatforge.
//!
//! This crate contains the core domain types used across the Chatforge
//! platform: Bot, Lead, Message, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod bot;
pub mod config;
pub mod error;
pub mod lead;
pub mod message;
