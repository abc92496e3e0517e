//! Bot lifecycle CLI commands: create, list, show, delete.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::{Confirm, Input, Password};
use indicatif::{ProgressBar, ProgressStyle};

use chatforge_core::service::context::RequestContext;
use chatforge_types::bot::{Bot, BotId, BotStatus, CreateBotRequest};

use crate::state::AppState;

/// Create a new bot via interactive prompts or one-shot flags.
///
/// # Examples
///
/// ```bash
/// # Interactive
/// chatforge create bot
///
/// # One-shot with flags
/// chatforge create bot --name "Support" --owner acct_1 --api-key sk-...
/// ```
#[allow(clippy::too_many_arguments)]
pub async fn create_bot(
    state: &AppState,
    name: Option<String>,
    owner: Option<String>,
    api_key: Option<String>,
    welcome: Option<String>,
    persona: Option<String>,
    model: Option<String>,
    json: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Bot name")
            .interact_text()?,
    };

    let owner = match owner {
        Some(o) => o,
        None => Input::<String>::new()
            .with_prompt("Owner account id")
            .interact_text()?,
    };

    let api_key = match api_key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("Model provider API key")
            .interact()?,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Creating bot...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let request = CreateBotRequest {
        name,
        api_key,
        owner_id: owner.clone(),
        welcome_message: welcome,
        persona,
        model_name: model,
        ..Default::default()
    };

    let ctx = RequestContext::new(owner);
    let bot = state.bot_service.create_bot(&ctx, request).await?;

    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&bot)?);
        return Ok(());
    }

    println!();
    println!("  {} Bot created successfully!", style("✓").green().bold());
    println!();
    println!("  {}  {}", style("Name:").bold(), style(&bot.name).cyan());
    println!("  {}  {}", style("Owner:").bold(), &bot.owner_id);
    println!("  {}  {}", style("Status:").bold(), format_status(&bot.status));
    println!("  {}  {}", style("Model:").bold(), &bot.model_name);
    println!(
        "  {}  {}",
        style("ID:").bold(),
        style(bot.id.to_string()).dim()
    );
    println!();
    println!(
        "  Get the embed code: {}",
        style(format!("chatforge embed {}", bot.id)).yellow()
    );
    println!();

    Ok(())
}

/// List an owner's bots in a rich colored table.
pub async fn list_bots(state: &AppState, owner: &str, json: bool) -> Result<()> {
    let ctx = RequestContext::new(owner.to_string());
    let bots = state.bot_service.list_bots(&ctx).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bots)?);
        return Ok(());
    }

    if bots.is_empty() {
        println!();
        println!(
            "  {} No bots found for '{owner}'. Create one with: {}",
            style("i").blue().bold(),
            style("chatforge create bot").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("Model").fg(Color::White),
        Cell::new("Leads").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for bot in &bots {
        let status_cell = match &bot.status {
            BotStatus::Active => Cell::new("● active").fg(Color::Green),
            BotStatus::Inactive => Cell::new("○ inactive").fg(Color::Yellow),
        };

        let leads = if bot.lead_collection_enabled {
            "on"
        } else {
            "off"
        };

        table.add_row(vec![
            Cell::new(&bot.name).fg(Color::Cyan),
            status_cell,
            Cell::new(&bot.model_name),
            Cell::new(leads),
            Cell::new(bot.created_at.format("%Y-%m-%d").to_string()).fg(Color::DarkGrey),
            Cell::new(bot.id.to_string()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} bot{}",
        style(bots.len()).bold(),
        if bots.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show the full configuration of a bot.
pub async fn show_bot(state: &AppState, id: &str, json: bool) -> Result<()> {
    let bot = fetch_bot(state, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bot)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&bot.name).cyan().bold());
    println!();

    println!("  {}", style("── Details ──").dim());
    println!("  {}   {}", style("Owner:").bold(), &bot.owner_id);
    println!("  {}  {}", style("Status:").bold(), format_status(&bot.status));
    println!("  {}   {}", style("Model:").bold(), &bot.model_name);
    println!(
        "  {}      {}",
        style("ID:").bold(),
        style(bot.id.to_string()).dim()
    );
    println!();

    println!("  {}", style("── Behavior ──").dim());
    println!("  {}  {}", style("Welcome:").bold(), display_or_dash(&bot.welcome_message));
    println!("  {}  {}", style("Persona:").bold(), display_or_dash(&bot.persona));
    println!("  {}  {}", style("Blocked:").bold(), display_or_dash(&bot.blocked_topics));
    println!("  {}  {}", style("Max tokens:").bold(), bot.max_tokens);
    println!(
        "  {}  {}/day",
        style("Msg limit:").bold(),
        bot.daily_message_limit
    );
    println!();

    println!("  {}", style("── Lead capture ──").dim());
    if bot.lead_collection_enabled {
        let fields = if bot.lead_fields.is_empty() {
            "(no fields configured)".to_string()
        } else {
            bot.lead_fields.join(", ")
        };
        println!("  {}  enabled: {}", style("Fields:").bold(), fields);
    } else {
        println!("  {}", style("disabled").dim());
    }
    println!();

    println!("  {}", style("── Timestamps ──").dim());
    println!(
        "  {}  {}",
        style("Created:").bold(),
        bot.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "  {}  {}",
        style("Updated:").bold(),
        bot.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    Ok(())
}

/// Delete a bot permanently with confirmation.
pub async fn delete_bot(state: &AppState, id: &str, force: bool, json: bool) -> Result<()> {
    let bot = fetch_bot(state, id).await?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete bot '{}' and all its leads and messages?",
                style(&bot.name).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.red} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Deleting {}...", bot.name));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let ctx = RequestContext::new(bot.owner_id.clone());
    state.bot_service.delete_bot(&ctx, &bot.id).await?;

    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::json!({"deleted": true, "id": bot.id}));
    } else {
        println!("  {} Bot '{}' deleted.", style("✓").red().bold(), bot.name);
    }

    Ok(())
}

/// Parse an id argument and load the bot, with a friendly error for bad ids.
pub(crate) async fn fetch_bot(state: &AppState, id: &str) -> Result<Bot> {
    let bot_id: BotId = id
        .parse()
        .map_err(|_| anyhow::anyhow!("'{id}' is not a valid bot id"))?;
    Ok(state.bot_service.get_bot(&bot_id).await?)
}

// --- Formatting helpers ---

fn format_status(status: &BotStatus) -> String {
    match status {
        BotStatus::Active => format!("{}", style("● active").green()),
        BotStatus::Inactive => format!("{}", style("○ inactive").yellow()),
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
