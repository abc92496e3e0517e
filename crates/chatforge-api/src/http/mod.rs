//! HTTP/REST API layer for Chatforge.
//!
//! Axum-based REST API with permissive CORS for cross-origin dashboard and
//! widget clients, and the canonical response contract: plain JSON bodies,
//! `{"error": message}` on failure, `{"success": true}` for deletes.

pub mod error;
pub mod handlers;
pub mod router;
