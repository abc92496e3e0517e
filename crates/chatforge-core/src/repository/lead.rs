//! Lead repository trait definition.

use chatforge_types::bot::BotId;
use chatforge_types::error::RepositoryError;
use chatforge_types::lead::Lead;

/// Repository trait for widget-captured leads.
///
/// Leads are append-only: the widget runtime writes them, the dashboard
/// reads them. No update or delete operations exist.
pub trait LeadRepository: Send + Sync {
    /// Persist a captured lead.
    fn append(
        &self,
        lead: &Lead,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List leads for a bot, newest first (`created_at` DESC).
    fn list_by_bot(
        &self,
        bot_id: &BotId,
    ) -> impl std::future::Future<Output = Result<Vec<Lead>, RepositoryError>> + Send;
}
