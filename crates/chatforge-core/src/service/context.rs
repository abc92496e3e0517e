//! Per-request context.
//!
//! Replaces the process-wide "current user" singleton of the original
//! dashboard: each handler invocation builds one of these and passes it
//! down, so nothing about the caller lives in global state.

use uuid::Uuid;

/// Identity and tracing scope for a single service invocation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The account the caller is acting as.
    pub owner_id: String,
    /// Unique id for log correlation across the call chain.
    pub request_id: Uuid,
}

impl RequestContext {
    /// Create a context for the given owner with a fresh request id.
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            request_id: Uuid::now_v7(),
        }
    }

    /// Context for requests that carry no owner identity of their own.
    ///
    /// Used by operations (update, delete, lead/message listings) where the
    /// acting owner is resolved from the stored record; the services consult
    /// the authorizer with that resolved owner.
    pub fn anonymous() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_ids_are_unique() {
        let a = RequestContext::new("u1");
        let b = RequestContext::new("u1");
        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.owner_id, b.owner_id);
    }
}
