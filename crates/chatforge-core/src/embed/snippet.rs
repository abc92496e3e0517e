//! Embed snippet builder.
//!
//! Produces the self-contained widget loader script for a bot: an IIFE that
//! injects `widget.js` with `data-*` attributes carrying the bot id, display
//! name, welcome message, and widget options. Output is byte-identical for
//! identical inputs, which the dashboard's "copy embed code" flow relies on.
//!
//! Every user-controlled value lands inside a single-quoted JS string
//! literal, so values are escaped for that syntax before interpolation.
//! `<` is escaped as `\x3C` so a `</script>` payload cannot terminate the
//! surrounding script element.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Welcome text substituted when the bot has none configured.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Hi! How can I help you today?";

/// Display name substituted when the bot has none configured.
const DEFAULT_DISPLAY_NAME: &str = "Chatbot";

/// Default widget loader URL, overridable per deployment via config.
const DEFAULT_SCRIPT_URL: &str = "https://cdn.chatforge.dev/widget.js";

/// Default API base the widget sends conversation traffic to.
const DEFAULT_API_BASE: &str = "https://api.chatforge.dev";

/// Corner of the page the chat toggle floats in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl WidgetPosition {
    /// Parse a position string, falling back to `bottom-right` for
    /// anything unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for WidgetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WidgetPosition::BottomRight => "bottom-right",
            WidgetPosition::BottomLeft => "bottom-left",
            WidgetPosition::TopRight => "top-right",
            WidgetPosition::TopLeft => "top-left",
        };
        write!(f, "{s}")
    }
}

impl FromStr for WidgetPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bottom-right" => Ok(WidgetPosition::BottomRight),
            "bottom-left" => Ok(WidgetPosition::BottomLeft),
            "top-right" => Ok(WidgetPosition::TopRight),
            "top-left" => Ok(WidgetPosition::TopLeft),
            other => Err(format!("invalid widget position: '{other}'")),
        }
    }
}

/// Rendered size of the chat window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl WidgetSize {
    /// Parse a size string, falling back to `medium` for anything
    /// unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for WidgetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        };
        write!(f, "{s}")
    }
}

impl FromStr for WidgetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            other => Err(format!("invalid widget size: '{other}'")),
        }
    }
}

/// Typed-slot builder for the embed snippet.
///
/// `bot_id` is the only required slot; everything else has a documented
/// default. `render` consumes nothing and may be called repeatedly.
#[derive(Debug, Clone)]
pub struct SnippetBuilder {
    bot_id: String,
    display_name: Option<String>,
    welcome_message: Option<String>,
    position: WidgetPosition,
    size: WidgetSize,
    script_url: Option<String>,
    api_base: Option<String>,
}

impl SnippetBuilder {
    /// Start a snippet for the given bot id.
    pub fn new(bot_id: impl Into<String>) -> Self {
        Self {
            bot_id: bot_id.into(),
            display_name: None,
            welcome_message: None,
            position: WidgetPosition::default(),
            size: WidgetSize::default(),
            script_url: None,
            api_base: None,
        }
    }

    /// Name shown in the chat window header.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// First message the widget shows. Blank values fall back to the
    /// default greeting.
    pub fn welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = Some(message.into());
        self
    }

    pub fn position(mut self, position: WidgetPosition) -> Self {
        self.position = position;
        self
    }

    pub fn size(mut self, size: WidgetSize) -> Self {
        self.size = size;
        self
    }

    /// Override the widget loader URL (per-deployment config).
    pub fn script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = Some(url.into());
        self
    }

    /// Override the API base URL the widget talks to.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Render the snippet. Deterministic: identical inputs produce
    /// byte-identical output.
    pub fn render(&self) -> String {
        let name = match self.display_name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => DEFAULT_DISPLAY_NAME,
        };
        let welcome = match self.welcome_message.as_deref() {
            Some(w) if !w.trim().is_empty() => w,
            _ => DEFAULT_WELCOME_MESSAGE,
        };
        let script_url = self.script_url.as_deref().unwrap_or(DEFAULT_SCRIPT_URL);
        let api_base = self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE);

        format!(
            "<script>\n\
             (function() {{\n\
             \x20\x20var script = document.createElement('script');\n\
             \x20\x20script.src = '{src}';\n\
             \x20\x20script.setAttribute('data-chatforge-id', '{id}');\n\
             \x20\x20script.setAttribute('data-bot-name', '{name}');\n\
             \x20\x20script.setAttribute('data-welcome', '{welcome}');\n\
             \x20\x20script.setAttribute('data-position', '{position}');\n\
             \x20\x20script.setAttribute('data-size', '{size}');\n\
             \x20\x20script.setAttribute('data-api-base', '{api}');\n\
             \x20\x20document.head.appendChild(script);\n\
             }})();\n\
             </script>",
            src = escape_js_single_quoted(script_url),
            id = escape_js_single_quoted(&self.bot_id),
            name = escape_js_single_quoted(name),
            welcome = escape_js_single_quoted(welcome),
            position = self.position,
            size = self.size,
            api = escape_js_single_quoted(api_base),
        )
    }
}

/// Escape a value for interpolation into a single-quoted JS string literal
/// embedded in an HTML `<script>` element.
///
/// Handles backslash, single quote, newline, carriage return, and `<`
/// (as `\x3C`, which neutralizes `</script>` breakout).
fn escape_js_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let build = || {
            SnippetBuilder::new("b1")
                .display_name("O'Brien's Bot")
                .welcome_message("<script>x</script>")
                .position(WidgetPosition::BottomLeft)
                .size(WidgetSize::Large)
                .render()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_render_contains_bot_id_and_options() {
        let snippet = SnippetBuilder::new("b1")
            .position(WidgetPosition::TopLeft)
            .size(WidgetSize::Small)
            .render();
        assert!(snippet.contains("script.setAttribute('data-chatforge-id', 'b1');"));
        assert!(snippet.contains("script.setAttribute('data-position', 'top-left');"));
        assert!(snippet.contains("script.setAttribute('data-size', 'small');"));
        assert!(snippet.starts_with("<script>"));
        assert!(snippet.ends_with("</script>"));
    }

    #[test]
    fn test_single_quotes_are_escaped() {
        let snippet = SnippetBuilder::new("b1")
            .display_name("O'Brien's Bot")
            .render();
        assert!(snippet.contains(r"O\'Brien\'s Bot"));
        // The raw value must never appear unescaped inside the literal.
        assert!(!snippet.contains("'O'Brien"));
    }

    #[test]
    fn test_script_tag_cannot_break_out() {
        let snippet = SnippetBuilder::new("b1")
            .welcome_message("</script><script>alert(1)</script>")
            .render();
        // The only literal "</script>" is the one closing the snippet itself.
        assert_eq!(snippet.matches("</script>").count(), 1);
        assert!(snippet.contains(r"\x3C/script>"));
    }

    #[test]
    fn test_backslash_escaped_before_quote() {
        let snippet = SnippetBuilder::new("b1").display_name(r"a\'b").render();
        assert!(snippet.contains(r"a\\\'b"));
    }

    #[test]
    fn test_newlines_escaped() {
        let snippet = SnippetBuilder::new("b1")
            .welcome_message("line one\nline two")
            .render();
        assert!(snippet.contains(r"line one\nline two"));
    }

    #[test]
    fn test_blank_welcome_falls_back_to_default() {
        let snippet = SnippetBuilder::new("b1").welcome_message("   ").render();
        assert!(snippet.contains(DEFAULT_WELCOME_MESSAGE));
    }

    #[test]
    fn test_missing_welcome_falls_back_to_default() {
        let snippet = SnippetBuilder::new("b1").render();
        assert!(snippet.contains("'Hi! How can I help you today?'"));
    }

    #[test]
    fn test_unrecognized_position_defaults_bottom_right() {
        assert_eq!(
            WidgetPosition::parse_or_default("middle-out"),
            WidgetPosition::BottomRight
        );
        assert_eq!(
            WidgetPosition::parse_or_default("Top-Left"),
            WidgetPosition::TopLeft
        );
    }

    #[test]
    fn test_unrecognized_size_defaults_medium() {
        assert_eq!(WidgetSize::parse_or_default("jumbo"), WidgetSize::Medium);
        assert_eq!(WidgetSize::parse_or_default("LARGE"), WidgetSize::Large);
    }

    #[test]
    fn test_custom_script_url_and_api_base() {
        let snippet = SnippetBuilder::new("b1")
            .script_url("https://example.com/w.js")
            .api_base("https://api.example.com")
            .render();
        assert!(snippet.contains("script.src = 'https://example.com/w.js';"));
        assert!(snippet.contains("script.setAttribute('data-api-base', 'https://api.example.com');"));
    }
}
