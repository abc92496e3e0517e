//! SQLite lead repository implementation.
//!
//! Leads are append-only; listings are newest-first for the dashboard.

use chatforge_core::repository::lead::LeadRepository;
use chatforge_types::bot::BotId;
use chatforge_types::error::RepositoryError;
use chatforge_types::lead::Lead;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `LeadRepository`.
pub struct SqliteLeadRepository {
    pool: DatabasePool,
}

impl SqliteLeadRepository {
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

fn lead_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Lead, RepositoryError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let bot_id: String = row
        .try_get("bot_id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let fields: String = row
        .try_get("fields")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(Lead {
        id: parse_uuid(&id)?,
        bot_id: BotId(parse_uuid(&bot_id)?),
        fields: serde_json::from_str(&fields)
            .map_err(|e| RepositoryError::Query(format!("invalid fields JSON: {e}")))?,
        created_at: parse_datetime(&created_at)?,
    })
}

impl LeadRepository for SqliteLeadRepository {
    async fn append(&self, lead: &Lead) -> Result<(), RepositoryError> {
        let fields = serde_json::to_string(&lead.fields)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query("INSERT INTO leads (id, bot_id, fields, created_at) VALUES (?, ?, ?, ?)")
            .bind(lead.id.to_string())
            .bind(lead.bot_id.to_string())
            .bind(&fields)
            .bind(lead.created_at.to_rfc3339())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_by_bot(&self, bot_id: &BotId) -> Result<Vec<Lead>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM leads WHERE bot_id = ? ORDER BY created_at DESC",
        )
        .bind(bot_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(lead_from_row).collect()
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
            lead_collection_enabled: true,
            lead_fields: vec!["Name".to_string(), "Email".to_string()],
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
    async fn test_append_and_list_newest_first() {
        let pool = test_pool().await;
        let bot_id = seed_bot(&pool).await;
        let repo = SqliteLeadRepository::new(pool);

        let mut first = Lead::new(bot_id, serde_json::json!({"Name": "Ada"}));
        first.created_at = Utc::now() - chrono::Duration::minutes(5);
        let second = Lead::new(bot_id, serde_json::json!({"Name": "Grace"}));

        repo.append(&first).await.unwrap();
        repo.append(&second).await.unwrap();

        let leads = repo.list_by_bot(&bot_id).await.unwrap();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].fields["Name"], "Grace");
        assert_eq!(leads[1].fields["Name"], "Ada");
    }

    #[tokio::test]
    async fn test_list_unknown_bot_is_empty() {
        let pool = test_pool().await;
        let repo = SqliteLeadRepository::new(pool);

        let leads = repo.list_by_bot(&BotId::new()).await.unwrap();
        assert!(leads.is_empty());
    }

    #[tokio::test]
    async fn test_append_requires_existing_bot() {
        let pool = test_pool().await;
        let repo = SqliteLeadRepository::new(pool);

        // Foreign keys are enforced: appending to an unknown bot fails.
        let lead = Lead::new(BotId::new(), serde_json::json!({}));
        let err = repo.append(&lead).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)));
    }
}
