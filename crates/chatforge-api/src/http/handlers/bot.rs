//! Bot CRUD handlers for the REST API.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use chatforge_core::service::context::RequestContext;
use chatforge_types::bot::{Bot, BotId, CreateBotRequest, UpdateBotRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// Query parameters for the bot list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct BotListQuery {
    /// Owning account to list bots for. Required: an unfiltered listing
    /// would cross owner boundaries.
    pub user_id: Option<String>,
}

/// Body for DELETE /bots.
#[derive(Debug, Deserialize)]
pub struct DeleteBotRequest {
    pub id: BotId,
}

/// GET /bots?user_id=<id> - List all bots for an owner.
pub async fn list_bots(
    State(state): State<AppState>,
    Query(query): Query<BotListQuery>,
) -> Result<Json<Vec<Bot>>, AppError> {
    let user_id = query
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("user_id query parameter is required".to_string()))?;

    let ctx = RequestContext::new(user_id);
    let bots = state.bot_service.list_bots(&ctx).await?;
    Ok(Json(bots))
}

/// POST /bots - Create a new bot.
///
/// Responds 200 with the created record (not 201, preserved for client
/// compatibility).
pub async fn create_bot(
    State(state): State<AppState>,
    Json(body): Json<CreateBotRequest>,
) -> Result<Json<Bot>, AppError> {
    let ctx = RequestContext::new(body.owner_id.clone());
    let bot = state.bot_service.create_bot(&ctx, body).await?;
    Ok(Json(bot))
}

/// PUT /bots - Partial update; the body carries `id` plus changed fields.
pub async fn update_bot(
    State(state): State<AppState>,
    Json(body): Json<UpdateBotRequest>,
) -> Result<Json<Bot>, AppError> {
    let ctx = RequestContext::anonymous();
    let bot = state.bot_service.update_bot(&ctx, body).await?;
    Ok(Json(bot))
}

/// DELETE /bots - Remove a bot; the body carries `{id}`.
///
/// Idempotent: deleting an id that no longer exists still yields
/// `{"success": true}`.
pub async fn delete_bot(
    State(state): State<AppState>,
    Json(body): Json<DeleteBotRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ctx = RequestContext::anonymous();
    state.bot_service.delete_bot(&ctx, &body.id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
