//! Bot repository trait definition.

use chatforge_types::bot::{Bot, BotId};
use chatforge_types::error::RepositoryError;

/// Repository trait for bot persistence.
///
/// Implementations live in chatforge-infra (e.g., SqliteBotRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
///
/// Required-field validation happens at the service boundary; the
/// repository only enforces what storage enforces (uniqueness of `id`).
pub trait BotRepository: Send + Sync {
    /// Insert a fully-populated bot record. Returns the created bot.
    fn create(
        &self,
        bot: &Bot,
    ) -> impl std::future::Future<Output = Result<Bot, RepositoryError>> + Send;

    /// Get a bot by its unique ID.
    fn get_by_id(
        &self,
        id: &BotId,
    ) -> impl std::future::Future<Output = Result<Option<Bot>, RepositoryError>> + Send;

    /// List all bots belonging to an owner. Empty vec when none.
    fn get_by_owner(
        &self,
        owner_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Bot>, RepositoryError>> + Send;

    /// Write an existing bot's full row. Returns `NotFound` if the id is absent.
    fn update(
        &self,
        bot: &Bot,
    ) -> impl std::future::Future<Output = Result<Bot, RepositoryError>> + Send;

    /// Remove a bot by ID. Idempotent: deleting an absent id succeeds.
    fn delete(
        &self,
        id: &BotId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
