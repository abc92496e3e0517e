//! Embed snippet CLI command.

use anyhow::Result;
use console::style;

use chatforge_core::embed::{SnippetBuilder, WidgetPosition, WidgetSize};

use crate::cli::bot::fetch_bot;
use crate::state::AppState;

/// Print the embed snippet for a bot.
///
/// The snippet itself always goes to stdout unstyled so it can be piped
/// straight into a clipboard tool.
pub async fn print_embed(
    state: &AppState,
    id: &str,
    position: &str,
    size: &str,
    json: bool,
) -> Result<()> {
    let bot = fetch_bot(state, id).await?;

    let snippet = SnippetBuilder::new(bot.id.to_string())
        .display_name(&*bot.name)
        .welcome_message(&*bot.welcome_message)
        .position(WidgetPosition::parse_or_default(position))
        .size(WidgetSize::parse_or_default(size))
        .script_url(&*state.config.widget_script_url)
        .api_base(&*state.config.api_base_url)
        .render();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "bot_id": bot.id,
                "snippet": snippet,
            }))?
        );
        return Ok(());
    }

    eprintln!();
    eprintln!(
        "  {} Paste this before the closing </body> tag:",
        style("i").blue().bold()
    );
    eprintln!();
    println!("{snippet}");
    eprintln!();

    Ok(())
}
