use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bot::BotId;

/// A contact record captured by a bot's widget during a conversation.
///
/// Appended by the widget runtime (external to this service); read-only
/// over the HTTP surface. `fields` is a JSON object keyed by the owning
/// bot's configured `lead_fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub bot_id: BotId,
    pub fields: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Build a new lead for a bot with the given captured field values.
    pub fn new(bot_id: BotId, fields: serde_json::Value) -> Self {
        Self {
            id: Uuid::now_v7(),
            bot_id,
            fields,
            created_at: Utc::now(),
        }
    }
}
