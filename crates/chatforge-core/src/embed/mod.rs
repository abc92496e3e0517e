//! Embed snippet generation.
//!
//! Pure, deterministic mapping from a bot's widget configuration to the
//! `<script>` block a site owner pastes into their page. No network calls,
//! no side effects.

pub mod snippet;

pub use snippet::{SnippetBuilder, WidgetPosition, WidgetSize};
