use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::bot::BotId;

/// Who produced a widget conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Visitor,
    Bot,
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSender::Visitor => write!(f, "visitor"),
            MessageSender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for MessageSender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visitor" => Ok(MessageSender::Visitor),
            "bot" => Ok(MessageSender::Bot),
            other => Err(format!("invalid message sender: '{other}'")),
        }
    }
}

/// A single widget conversation message.
///
/// Appended by the widget runtime (external to this service); read-only
/// over the HTTP surface, listed in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub bot_id: BotId,
    pub sender: MessageSender,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Build a new message in a bot's conversation log.
    pub fn new(bot_id: BotId, sender: MessageSender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            bot_id,
            sender,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
