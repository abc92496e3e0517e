//! Message repository trait definition.

use chatforge_types::bot::BotId;
use chatforge_types::error::RepositoryError;
use chatforge_types::message::Message;

/// Repository trait for widget conversation messages.
///
/// Append-only, like leads: the widget runtime writes, the dashboard reads
/// transcripts in chronological order.
pub trait MessageRepository: Send + Sync {
    /// Persist a conversation message.
    fn append(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List messages for a bot in conversation order (`created_at` ASC).
    fn list_by_bot(
        &self,
        bot_id: &BotId,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
