//! REST API request handlers.

pub mod bot;
pub mod embed;
pub mod lead;
pub mod message;
