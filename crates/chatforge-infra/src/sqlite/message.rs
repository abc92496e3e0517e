//! SQLite message repository implementation.
//!
//! Conversation transcripts are append-only and listed in chronological
//! order (`created_at` ASC), matching how the dashboard replays them.

use chatforge_core::repository::message::MessageRepository;
use chatforge_types::bot::BotId;
use chatforge_types::error::RepositoryError;
use chatforge_types::message::{Message, MessageSender};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn parse_uuid(s: &str) -> Result<Uuid, RepositoryError> {
    s.parse::<Uuid>()
        .map_err(|e| RepositoryError::Query(format!("invalid UUID: {e}")))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Message, RepositoryError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let bot_id: String = row
        .try_get("bot_id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let sender: String = row
        .try_get("sender")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let content: String = row
        .try_get("content")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(Message {
        id: parse_uuid(&id)?,
        bot_id: BotId(parse_uuid(&bot_id)?),
        sender: sender
            .parse::<MessageSender>()
            .map_err(RepositoryError::Query)?,
        content,
        created_at: parse_datetime(&created_at)?,
    })
}

impl MessageRepository for SqliteMessageRepository {
    async fn append(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO messages (id, bot_id, sender, content, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(message.bot_id.to_string())
        .bind(message.sender.to_string())
        .bind(&message.content)
        .bind(message.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_by_bot(&self, bot_id: &BotId) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE bot_id = ? ORDER BY created_at ASC",
        )
        .bind(bot_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(message_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::bot::SqliteBotRepository;
    use chatforge_core::repository::bot::BotRepository;
    use chatforge_types::bot::{Bot, BotStatus};

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    async fn seed_bot(pool: &DatabasePool) -> BotId {
        let now = Utc::now();
        let bot = Bot {
            id: BotId::new(),
            owner_id: "u1".to_string(),
            name: "Support".to_string(),
            status: BotStatus::Active,
            welcome_message: String::new(),
            instructions: String::new(),
            persona: String::new(),
            blocked_topics: String::new(),
            model_name: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            daily_message_limit: 1000,
            api_key: "sk-test".to_string(),
            lead_collection_enabled: false,
            lead_fields: vec![],
            training_sources: vec![],
            training_urls: vec![],
            created_at: now,
            updated_at: now,
        };
        SqliteBotRepository::new(pool.clone())
            .create(&bot)
            .await
            .unwrap();
        bot.id
    }

    #[tokio::test]
    async fn test_append_and_list_chronological() {
        let pool = test_pool().await;
        let bot_id = seed_bot(&pool).await;
        let repo = SqliteMessageRepository::new(pool);

        let mut first = Message::new(bot_id, MessageSender::Visitor, "hello");
        first.created_at = Utc::now() - chrono::Duration::minutes(2);
        let second = Message::new(bot_id, MessageSender::Bot, "hi there");

        // Insert out of order; listing must sort by created_at ASC.
        repo.append(&second).await.unwrap();
        repo.append(&first).await.unwrap();

        let messages = repo.list_by_bot(&bot_id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "hello");
        assert_eq!(messages[0].sender, MessageSender::Visitor);
        assert_eq!(messages[1].content, "hi there");
    }

    #[tokio::test]
    async fn test_list_unknown_bot_is_empty() {
        let pool = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);

        let messages = repo.list_by_bot(&BotId::new()).await.unwrap();
        assert!(messages.is_empty());
    }
}
