//! SQLite bot repository implementation.
//!
//! Implements `BotRepository` from `chatforge-core` using sqlx with split
//! read/write pools. List columns (`lead_fields`, `training_sources`,
//! `training_urls`) are JSON-encoded TEXT; timestamps are RFC 3339 TEXT.

use chatforge_core::repository::bot::BotRepository;
use chatforge_types::bot::{Bot, BotId, BotStatus};
use chatforge_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `BotRepository`.
pub struct SqliteBotRepository {
    pool: DatabasePool,
}

impl SqliteBotRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Bot.
struct BotRow {
    id: String,
    owner_id: String,
    name: String,
    status: String,
    welcome_message: String,
    instructions: String,
    persona: String,
    blocked_topics: String,
    model_name: String,
    max_tokens: i64,
    daily_message_limit: i64,
    api_key: String,
    lead_collection_enabled: bool,
    lead_fields: String,
    training_sources: String,
    training_urls: String,
    created_at: String,
    updated_at: String,
}

impl BotRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            name: row.try_get("name")?,
            status: row.try_get("status")?,
            welcome_message: row.try_get("welcome_message")?,
            instructions: row.try_get("instructions")?,
            persona: row.try_get("persona")?,
            blocked_topics: row.try_get("blocked_topics")?,
            model_name: row.try_get("model_name")?,
            max_tokens: row.try_get("max_tokens")?,
            daily_message_limit: row.try_get("daily_message_limit")?,
            api_key: row.try_get("api_key")?,
            lead_collection_enabled: row.try_get("lead_collection_enabled")?,
            lead_fields: row.try_get("lead_fields")?,
            training_sources: row.try_get("training_sources")?,
            training_urls: row.try_get("training_urls")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_bot(self) -> Result<Bot, RepositoryError> {
        let id = self
            .id
            .parse::<BotId>()
            .map_err(|e| RepositoryError::Query(format!("invalid bot id: {e}")))?;

        let status: BotStatus = self
            .status
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        let lead_fields = parse_string_list(&self.lead_fields, "lead_fields")?;
        let training_sources = parse_string_list(&self.training_sources, "training_sources")?;
        let training_urls = parse_string_list(&self.training_urls, "training_urls")?;

        let created_at = parse_datetime(&self.created_at)?;
        let updated_at = parse_datetime(&self.updated_at)?;

        Ok(Bot {
            id,
            owner_id: self.owner_id,
            name: self.name,
            status,
            welcome_message: self.welcome_message,
            instructions: self.instructions,
            persona: self.persona,
            blocked_topics: self.blocked_topics,
            model_name: self.model_name,
            max_tokens: self.max_tokens,
            daily_message_limit: self.daily_message_limit,
            api_key: self.api_key,
            lead_collection_enabled: self.lead_collection_enabled,
            lead_fields,
            training_sources,
            training_urls,
            created_at,
            updated_at,
        })
    }
}

fn parse_string_list(s: &str, column: &str) -> Result<Vec<String>, RepositoryError> {
    serde_json::from_str(s)
        .map_err(|e| RepositoryError::Query(format!("invalid {column} JSON: {e}")))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn encode_string_list(list: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(list).map_err(|e| RepositoryError::Query(e.to_string()))
}

impl BotRepository for SqliteBotRepository {
    async fn create(&self, bot: &Bot) -> Result<Bot, RepositoryError> {
        let lead_fields = encode_string_list(&bot.lead_fields)?;
        let training_sources = encode_string_list(&bot.training_sources)?;
        let training_urls = encode_string_list(&bot.training_urls)?;

        let result = sqlx::query(
            "INSERT INTO bots (id, owner_id, name, status, welcome_message, instructions, persona, blocked_topics, model_name, max_tokens, daily_message_limit, api_key, lead_collection_enabled, lead_fields, training_sources, training_urls, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(bot.id.to_string())
        .bind(&bot.owner_id)
        .bind(&bot.name)
        .bind(bot.status.to_string())
        .bind(&bot.welcome_message)
        .bind(&bot.instructions)
        .bind(&bot.persona)
        .bind(&bot.blocked_topics)
        .bind(&bot.model_name)
        .bind(bot.max_tokens)
        .bind(bot.daily_message_limit)
        .bind(&bot.api_key)
        .bind(bot.lead_collection_enabled)
        .bind(&lead_fields)
        .bind(&training_sources)
        .bind(&training_urls)
        .bind(format_datetime(&bot.created_at))
        .bind(format_datetime(&bot.updated_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(bot.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "bot id '{}' already exists",
                    bot.id
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &BotId) -> Result<Option<Bot>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM bots WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let bot_row =
                    BotRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(bot_row.into_bot()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_owner(&self, owner_id: &str) -> Result<Vec<Bot>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM bots WHERE owner_id = ? ORDER BY created_at DESC")
            .bind(owner_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut bots = Vec::with_capacity(rows.len());
        for row in &rows {
            let bot_row =
                BotRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            bots.push(bot_row.into_bot()?);
        }

        Ok(bots)
    }

    async fn update(&self, bot: &Bot) -> Result<Bot, RepositoryError> {
        let lead_fields = encode_string_list(&bot.lead_fields)?;
        let training_sources = encode_string_list(&bot.training_sources)?;
        let training_urls = encode_string_list(&bot.training_urls)?;

        let result = sqlx::query(
            "UPDATE bots SET name = ?, status = ?, welcome_message = ?, instructions = ?, persona = ?, blocked_topics = ?, model_name = ?, max_tokens = ?, daily_message_limit = ?, api_key = ?, lead_collection_enabled = ?, lead_fields = ?, training_sources = ?, training_urls = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&bot.name)
        .bind(bot.status.to_string())
        .bind(&bot.welcome_message)
        .bind(&bot.instructions)
        .bind(&bot.persona)
        .bind(&bot.blocked_topics)
        .bind(&bot.model_name)
        .bind(bot.max_tokens)
        .bind(bot.daily_message_limit)
        .bind(&bot.api_key)
        .bind(bot.lead_collection_enabled)
        .bind(&lead_fields)
        .bind(&training_sources)
        .bind(&training_urls)
        .bind(format_datetime(&bot.updated_at))
        .bind(bot.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(bot.clone())
    }

    async fn delete(&self, id: &BotId) -> Result<(), RepositoryError> {
        // Idempotent by contract: zero rows affected is still success.
        sqlx::query("DELETE FROM bots WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}
