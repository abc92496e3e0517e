//! Message transcript handler.

use axum::extract::{Path, State};
use axum::Json;

use chatforge_core::service::context::RequestContext;
use chatforge_types::bot::BotId;
use chatforge_types::message::Message;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /messages/{bot_id} - List a bot's conversation transcript in
/// chronological order.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    let bot_id: BotId = bot_id
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid bot id: '{bot_id}'")))?;

    let ctx = RequestContext::anonymous();
    let messages = state.capture_service.list_messages(&ctx, &bot_id).await?;
    Ok(Json(messages))
}
