//! Embed snippet handler: the server-side "copy embed code" path.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use chatforge_core::embed::{SnippetBuilder, WidgetPosition, WidgetSize};
use chatforge_types::bot::BotId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Widget options for the snippet. Unrecognized values fall back to the
/// documented defaults rather than erroring.
#[derive(Debug, Deserialize, Default)]
pub struct EmbedQuery {
    pub position: Option<String>,
    pub size: Option<String>,
}

/// GET /bots/{id}/embed - Render the embed snippet for a bot.
///
/// Deterministic for a given bot configuration and query options, so the
/// dashboard can diff/copy it safely.
pub async fn get_embed(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<EmbedQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let bot_id: BotId = id
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid bot id: '{id}'")))?;

    let bot = state.bot_service.get_bot(&bot_id).await?;

    let position = query
        .position
        .as_deref()
        .map(WidgetPosition::parse_or_default)
        .unwrap_or_default();
    let size = query
        .size
        .as_deref()
        .map(WidgetSize::parse_or_default)
        .unwrap_or_default();

    let snippet = SnippetBuilder::new(bot.id.to_string())
        .display_name(&*bot.name)
        .welcome_message(&*bot.welcome_message)
        .position(position)
        .size(size)
        .script_url(&*state.config.widget_script_url)
        .api_base(&*state.config.api_base_url)
        .render();

    Ok(Json(serde_json::json!({
        "bot_id": bot.id,
        "snippet": snippet,
    })))
}
