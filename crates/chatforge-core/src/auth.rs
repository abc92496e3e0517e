//! Authorization port.
//!
//! Authentication is an external collaborator: this service only asks a
//! capability question (`is_authorized(owner_id, action)`) and never
//! implements credential handling itself. The infrastructure layer provides
//! the concrete answer (chatforge-infra ships a permissive adapter).

use std::fmt;

/// Actions a caller can be authorized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateBot,
    ListBots,
    UpdateBot,
    DeleteBot,
    ViewLeads,
    ViewMessages,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::CreateBot => "create_bot",
            Action::ListBots => "list_bots",
            Action::UpdateBot => "update_bot",
            Action::DeleteBot => "delete_bot",
            Action::ViewLeads => "view_leads",
            Action::ViewMessages => "view_messages",
        };
        write!(f, "{name}")
    }
}

/// Capability check consulted by the services before every operation.
pub trait Authorizer: Send + Sync {
    /// Whether `owner_id` may perform `action`.
    fn is_authorized(
        &self,
        owner_id: &str,
        action: Action,
    ) -> impl std::future::Future<Output = bool> + Send;
}
