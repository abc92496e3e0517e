//! Business logic for the Chatforge bot resource service.
//!
//! Contains the repository traits (ports) that `chatforge-infra` implements,
//! the services that enforce validation and ownership scoping, the
//! authorization port, and the pure embed snippet generator.

pub mod auth;
pub mod embed;
pub mod repository;
pub mod service;
