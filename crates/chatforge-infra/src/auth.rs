//! Permissive authorizer adapter.
//!
//! Authentication is an external collaborator; until a real identity
//! provider is wired in, every capability check passes. The decision is
//! logged so traffic remains auditable.

use chatforge_core::auth::{Action, Authorizer};

/// Allows every action for every owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveAuthorizer;

impl PermissiveAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for PermissiveAuthorizer {
    async fn is_authorized(&self, owner_id: &str, action: Action) -> bool {
        tracing::debug!(owner_id, %action, "authorization granted (permissive)");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_permissive_allows_everything() {
        let authz = PermissiveAuthorizer::new();
        assert!(authz.is_authorized("u1", Action::CreateBot).await);
        assert!(authz.is_authorized("", Action::DeleteBot).await);
    }
}
