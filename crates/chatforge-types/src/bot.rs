use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Default token cap applied when a create request omits `max_tokens`.
pub const DEFAULT_MAX_TOKENS: i64 = 500;

/// Default daily message allowance (rate-limiting hint, not enforced here).
pub const DEFAULT_DAILY_MESSAGE_LIMIT: i64 = 1000;

/// Default language-model backend for new bots.
pub const DEFAULT_MODEL_NAME: &str = "gpt-3.5-turbo";

/// Unique identifier for a bot, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotId(pub Uuid);

impl BotId {
    /// Create a new BotId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a BotId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for BotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BotId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A configured chatbot owned by an account.
///
/// Holds behavior configuration plus the model credential needed by the
/// (external) chat-serving path. Managed via CLI or REST API; rendered on
/// third-party pages through the embed snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    /// Identifier of the owning account. Set at creation, immutable.
    /// All list/read operations are scoped to it.
    pub owner_id: String,
    /// Freeform display name. Never empty once persisted.
    pub name: String,
    /// Current lifecycle state.
    pub status: BotStatus,
    /// First message the widget shows to a visitor.
    pub welcome_message: String,
    /// Behavior instructions fed to the model.
    pub instructions: String,
    /// Persona description (tone, voice).
    pub persona: String,
    /// Topics the bot must refuse to discuss.
    pub blocked_topics: String,
    /// Language-model backend identifier.
    pub model_name: String,
    /// Upper bound on response length, always positive.
    pub max_tokens: i64,
    /// Daily message allowance. A hint for the serving path, not enforced here.
    pub daily_message_limit: i64,
    /// Provider credential. Opaque to this service; never empty once persisted.
    pub api_key: String,
    /// Whether the widget collects contact details from visitors.
    pub lead_collection_enabled: bool,
    /// Ordered field names the lead form collects when enabled.
    pub lead_fields: Vec<String>,
    /// Uploaded training file names. Descriptive only, no ingestion here.
    pub training_sources: Vec<String>,
    /// Training URLs. Descriptive only.
    pub training_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bot lifecycle states.
///
/// - Active: the widget serves conversations
/// - Inactive: paused, configuration preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    Active,
    Inactive,
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStatus::Active => write!(f, "active"),
            BotStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for BotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(BotStatus::Active),
            "inactive" => Ok(BotStatus::Inactive),
            other => Err(format!("invalid bot status: '{other}'")),
        }
    }
}

impl Default for BotStatus {
    fn default() -> Self {
        BotStatus::Active
    }
}

/// Request to create a new bot.
///
/// `name`, `api_key`, and `owner_id` are required and must be non-empty
/// after trimming -- everything else gets documented defaults. All fields
/// are optional on the wire; a missing required field fails validation at
/// the service, not deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateBotRequest {
    pub name: String,
    pub api_key: String,
    pub owner_id: String,
    pub status: Option<BotStatus>,
    pub welcome_message: Option<String>,
    pub instructions: Option<String>,
    pub persona: Option<String>,
    pub blocked_topics: Option<String>,
    pub model_name: Option<String>,
    pub max_tokens: Option<i64>,
    pub daily_message_limit: Option<i64>,
    pub lead_collection_enabled: Option<bool>,
    pub lead_fields: Option<Vec<String>>,
    pub training_sources: Option<Vec<String>>,
    pub training_urls: Option<Vec<String>>,
}

/// Partial update for an existing bot.
///
/// Only fields present in the request replace stored values. `owner_id` and
/// `created_at` are write-once and deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBotRequest {
    pub id: BotId,
    pub name: Option<String>,
    pub status: Option<BotStatus>,
    pub welcome_message: Option<String>,
    pub instructions: Option<String>,
    pub persona: Option<String>,
    pub blocked_topics: Option<String>,
    pub model_name: Option<String>,
    pub max_tokens: Option<i64>,
    pub daily_message_limit: Option<i64>,
    pub api_key: Option<String>,
    pub lead_collection_enabled: Option<bool>,
    pub lead_fields: Option<Vec<String>>,
    pub training_sources: Option<Vec<String>>,
    pub training_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_id_display_roundtrip() {
        let id = BotId::new();
        let s = id.to_string();
        let parsed: BotId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_bot_status_roundtrip() {
        for status in [BotStatus::Active, BotStatus::Inactive] {
            let s = status.to_string();
            let parsed: BotStatus = s.parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_bot_status_rejects_unknown() {
        let err = "archived".parse::<BotStatus>().unwrap_err();
        assert!(err.contains("archived"));
    }

    #[test]
    fn test_bot_status_serde_lowercase() {
        let json = serde_json::to_string(&BotStatus::Active).unwrap();
        assert_eq!(json, r#""active""#);
    }

    #[test]
    fn test_create_request_minimal_json() {
        let req: CreateBotRequest = serde_json::from_str(
            r#"{"name":"Support","api_key":"sk-x","owner_id":"u1"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Support");
        assert!(req.max_tokens.is_none());
        assert!(req.lead_fields.is_none());
    }

    #[test]
    fn test_create_request_missing_required_fields_parse_empty() {
        let req: CreateBotRequest =
            serde_json::from_str(r#"{"api_key":"sk-x","owner_id":"u1"}"#).unwrap();
        assert!(req.name.is_empty());
    }

    #[test]
    fn test_update_request_is_sparse() {
        let id = BotId::new();
        let req: UpdateBotRequest = serde_json::from_str(&format!(
            r#"{{"id":"{id}","persona":"Formal"}}"#
        ))
        .unwrap();
        assert_eq!(req.id, id);
        assert_eq!(req.persona.as_deref(), Some("Formal"));
        assert!(req.name.is_none());
        assert!(req.welcome_message.is_none());
    }
}
