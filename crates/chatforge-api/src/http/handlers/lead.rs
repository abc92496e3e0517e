//! Lead listing handler.

use axum::extract::{Path, State};
use axum::Json;

use chatforge_core::service::context::RequestContext;
use chatforge_types::bot::BotId;
use chatforge_types::lead::Lead;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /leads/{bot_id} - List a bot's captured leads, newest first.
pub async fn list_leads(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
) -> Result<Json<Vec<Lead>>, AppError> {
    let bot_id: BotId = bot_id
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid bot id: '{bot_id}'")))?;

    let ctx = RequestContext::anonymous();
    let leads = state.capture_service.list_leads(&ctx, &bot_id).await?;
    Ok(Json(leads))
}
