//! Bot management service.
//!
//! Enforces the creation/update contract over the repository port:
//! required-field validation, documented defaults, partial-merge updates,
//! owner scoping, and the capability check before every operation.

use chatforge_types::bot::{
    Bot, BotId, CreateBotRequest, UpdateBotRequest, DEFAULT_DAILY_MESSAGE_LIMIT,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL_NAME,
};
use chatforge_types::error::BotError;

use crate::auth::{Action, Authorizer};
use crate::repository::bot::BotRepository;
use crate::service::context::RequestContext;

/// Service orchestrating the bot lifecycle.
///
/// Generic over the repository and authorizer ports -- chatforge-core never
/// depends on chatforge-infra.
pub struct BotService<B: BotRepository, A: Authorizer> {
    repo: B,
    authorizer: A,
}

impl<B: BotRepository, A: Authorizer> BotService<B, A> {
    pub fn new(repo: B, authorizer: A) -> Self {
        Self { repo, authorizer }
    }

    /// Create a new bot.
    ///
    /// `name`, `api_key`, and `owner_id` must be non-empty after trimming;
    /// `max_tokens` and `daily_message_limit` must be positive when given.
    /// All other fields get documented defaults. The generated `id` and
    /// `created_at` are returned with the persisted record.
    pub async fn create_bot(
        &self,
        ctx: &RequestContext,
        request: CreateBotRequest,
    ) -> Result<Bot, BotError> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(BotError::Validation("name cannot be empty".to_string()));
        }
        let api_key = request.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(BotError::Validation("api_key cannot be empty".to_string()));
        }
        let owner_id = request.owner_id.trim().to_string();
        if owner_id.is_empty() {
            return Err(BotError::Validation("owner_id cannot be empty".to_string()));
        }

        let max_tokens = request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        if max_tokens <= 0 {
            return Err(BotError::Validation("max_tokens must be positive".to_string()));
        }
        let daily_message_limit = request
            .daily_message_limit
            .unwrap_or(DEFAULT_DAILY_MESSAGE_LIMIT);
        if daily_message_limit <= 0 {
            return Err(BotError::Validation(
                "daily_message_limit must be positive".to_string(),
            ));
        }

        self.check(&owner_id, Action::CreateBot).await?;

        let now = chrono::Utc::now();
        let bot = Bot {
            id: BotId::new(),
            owner_id,
            name,
            status: request.status.unwrap_or_default(),
            welcome_message: request.welcome_message.unwrap_or_default(),
            instructions: request.instructions.unwrap_or_default(),
            persona: request.persona.unwrap_or_default(),
            blocked_topics: request.blocked_topics.unwrap_or_default(),
            model_name: request
                .model_name
                .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
            max_tokens,
            daily_message_limit,
            api_key,
            lead_collection_enabled: request.lead_collection_enabled.unwrap_or(false),
            lead_fields: request.lead_fields.unwrap_or_default(),
            training_sources: request.training_sources.unwrap_or_default(),
            training_urls: request.training_urls.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(&bot).await?;
        tracing::info!(
            request_id = %ctx.request_id,
            bot_id = %created.id,
            owner_id = %created.owner_id,
            "bot created"
        );
        Ok(created)
    }

    /// List all bots belonging to the calling account.
    ///
    /// Always owner-scoped; an owner with no bots gets an empty list,
    /// never an error.
    pub async fn list_bots(&self, ctx: &RequestContext) -> Result<Vec<Bot>, BotError> {
        self.check(&ctx.owner_id, Action::ListBots).await?;
        Ok(self.repo.get_by_owner(&ctx.owner_id).await?)
    }

    /// Get a single bot by id.
    pub async fn get_bot(&self, id: &BotId) -> Result<Bot, BotError> {
        self.repo.get_by_id(id).await?.ok_or(BotError::NotFound)
    }

    /// Partial-merge update: only fields present in the request replace
    /// stored values. `id`, `owner_id`, and `created_at` are never
    /// replaceable. A merge that would empty `name` or `api_key` fails
    /// with a validation error before anything is written.
    pub async fn update_bot(
        &self,
        ctx: &RequestContext,
        request: UpdateBotRequest,
    ) -> Result<Bot, BotError> {
        let mut bot = self.get_bot(&request.id).await?;
        self.check(&bot.owner_id, Action::UpdateBot).await?;

        if let Some(name) = request.name {
            let trimmed = name.trim().to_string();
            if trimmed.is_empty() {
                return Err(BotError::Validation("name cannot be empty".to_string()));
            }
            bot.name = trimmed;
        }
        if let Some(api_key) = request.api_key {
            let trimmed = api_key.trim().to_string();
            if trimmed.is_empty() {
                return Err(BotError::Validation("api_key cannot be empty".to_string()));
            }
            bot.api_key = trimmed;
        }
        if let Some(status) = request.status {
            bot.status = status;
        }
        if let Some(welcome_message) = request.welcome_message {
            bot.welcome_message = welcome_message;
        }
        if let Some(instructions) = request.instructions {
            bot.instructions = instructions;
        }
        if let Some(persona) = request.persona {
            bot.persona = persona;
        }
        if let Some(blocked_topics) = request.blocked_topics {
            bot.blocked_topics = blocked_topics;
        }
        if let Some(model_name) = request.model_name {
            bot.model_name = model_name;
        }
        if let Some(max_tokens) = request.max_tokens {
            if max_tokens <= 0 {
                return Err(BotError::Validation("max_tokens must be positive".to_string()));
            }
            bot.max_tokens = max_tokens;
        }
        if let Some(limit) = request.daily_message_limit {
            if limit <= 0 {
                return Err(BotError::Validation(
                    "daily_message_limit must be positive".to_string(),
                ));
            }
            bot.daily_message_limit = limit;
        }
        if let Some(enabled) = request.lead_collection_enabled {
            bot.lead_collection_enabled = enabled;
        }
        if let Some(fields) = request.lead_fields {
            bot.lead_fields = fields;
        }
        if let Some(sources) = request.training_sources {
            bot.training_sources = sources;
        }
        if let Some(urls) = request.training_urls {
            bot.training_urls = urls;
        }

        bot.updated_at = chrono::Utc::now();

        let updated = self.repo.update(&bot).await?;
        tracing::info!(
            request_id = %ctx.request_id,
            bot_id = %updated.id,
            "bot updated"
        );
        Ok(updated)
    }

    /// Delete a bot. Terminal and idempotent: deleting an id that does not
    /// exist succeeds without error.
    pub async fn delete_bot(&self, ctx: &RequestContext, id: &BotId) -> Result<(), BotError> {
        if let Some(bot) = self.repo.get_by_id(id).await? {
            self.check(&bot.owner_id, Action::DeleteBot).await?;
        }
        self.repo.delete(id).await?;
        tracing::info!(request_id = %ctx.request_id, bot_id = %id, "bot deleted");
        Ok(())
    }

    async fn check(&self, owner_id: &str, action: Action) -> Result<(), BotError> {
        if self.authorizer.is_authorized(owner_id, action).await {
            Ok(())
        } else {
            Err(BotError::Unauthorized(format!(
                "owner '{owner_id}' may not {action}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatforge_types::error::RepositoryError;
    use std::sync::Mutex;

    /// In-memory repository for service-level tests.
    #[derive(Default)]
    struct MemoryBotRepository {
        bots: Mutex<Vec<Bot>>,
    }

    impl BotRepository for MemoryBotRepository {
        async fn create(&self, bot: &Bot) -> Result<Bot, RepositoryError> {
            self.bots.lock().unwrap().push(bot.clone());
            Ok(bot.clone())
        }

        async fn get_by_id(&self, id: &BotId) -> Result<Option<Bot>, RepositoryError> {
            Ok(self.bots.lock().unwrap().iter().find(|b| b.id == *id).cloned())
        }

        async fn get_by_owner(&self, owner_id: &str) -> Result<Vec<Bot>, RepositoryError> {
            Ok(self
                .bots
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.owner_id == owner_id)
                .cloned()
                .collect())
        }

        async fn update(&self, bot: &Bot) -> Result<Bot, RepositoryError> {
            let mut bots = self.bots.lock().unwrap();
            match bots.iter_mut().find(|b| b.id == bot.id) {
                Some(slot) => {
                    *slot = bot.clone();
                    Ok(bot.clone())
                }
                None => Err(RepositoryError::NotFound),
            }
        }

        async fn delete(&self, id: &BotId) -> Result<(), RepositoryError> {
            self.bots.lock().unwrap().retain(|b| b.id != *id);
            Ok(())
        }
    }

    struct AllowAll;

    impl Authorizer for AllowAll {
        async fn is_authorized(&self, _owner_id: &str, _action: Action) -> bool {
            true
        }
    }

    struct DenyAll;

    impl Authorizer for DenyAll {
        async fn is_authorized(&self, _owner_id: &str, _action: Action) -> bool {
            false
        }
    }

    fn service() -> BotService<MemoryBotRepository, AllowAll> {
        BotService::new(MemoryBotRepository::default(), AllowAll)
    }

    fn create_req(name: &str, api_key: &str, owner_id: &str) -> CreateBotRequest {
        CreateBotRequest {
            name: name.to_string(),
            api_key: api_key.to_string(),
            owner_id: owner_id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_read_roundtrip_with_defaults() {
        let svc = service();
        let ctx = RequestContext::new("u1");

        svc.create_bot(&ctx, create_req("Support", "sk-x", "u1"))
            .await
            .unwrap();

        let bots = svc.list_bots(&ctx).await.unwrap();
        assert_eq!(bots.len(), 1);
        assert_eq!(bots[0].name, "Support");
        assert_eq!(bots[0].status, chatforge_types::bot::BotStatus::Active);
        assert_eq!(bots[0].max_tokens, 500);
        assert_eq!(bots[0].daily_message_limit, 1000);
        assert!(!bots[0].lead_collection_enabled);
        assert_eq!(bots[0].model_name, "gpt-3.5-turbo");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let svc = service();
        let ctx = RequestContext::new("u1");

        let err = svc
            .create_bot(&ctx, create_req("", "sk-x", "u1"))
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));

        // Nothing persisted
        assert!(svc.list_bots(&ctx).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_whitespace_api_key() {
        let svc = service();
        let ctx = RequestContext::new("u1");

        let err = svc
            .create_bot(&ctx, create_req("Support", "   ", "u1"))
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_nonpositive_max_tokens() {
        let svc = service();
        let ctx = RequestContext::new("u1");

        let mut req = create_req("Support", "sk-x", "u1");
        req.max_tokens = Some(0);
        let err = svc.create_bot(&ctx, req).await.unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_is_partial_merge() {
        let svc = service();
        let ctx = RequestContext::new("u1");

        let mut req = create_req("Support", "sk-x", "u1");
        req.welcome_message = Some("Hi".to_string());
        let bot = svc.create_bot(&ctx, req).await.unwrap();

        let updated = svc
            .update_bot(
                &ctx,
                UpdateBotRequest {
                    id: bot.id,
                    persona: Some("Formal".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.welcome_message, "Hi");
        assert_eq!(updated.persona, "Formal");
        assert_eq!(updated.name, "Support");
        assert_eq!(updated.created_at, bot.created_at);
    }

    #[tokio::test]
    async fn test_update_cannot_empty_name() {
        let svc = service();
        let ctx = RequestContext::new("u1");
        let bot = svc
            .create_bot(&ctx, create_req("Support", "sk-x", "u1"))
            .await
            .unwrap();

        let err = svc
            .update_bot(
                &ctx,
                UpdateBotRequest {
                    id: bot.id,
                    name: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));

        // Stored record untouched
        let stored = svc.get_bot(&bot.id).await.unwrap();
        assert_eq!(stored.name, "Support");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let svc = service();
        let ctx = RequestContext::new("u1");

        let err = svc
            .update_bot(
                &ctx,
                UpdateBotRequest {
                    id: BotId::new(),
                    persona: Some("Formal".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_is_terminal_and_idempotent() {
        let svc = service();
        let ctx = RequestContext::new("u1");
        let bot = svc
            .create_bot(&ctx, create_req("Support", "sk-x", "u1"))
            .await
            .unwrap();

        svc.delete_bot(&ctx, &bot.id).await.unwrap();
        assert!(svc.list_bots(&ctx).await.unwrap().is_empty());

        // Second delete does not raise
        svc.delete_bot(&ctx, &bot.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_ownership_scoping() {
        let svc = service();
        let ctx_u1 = RequestContext::new("u1");
        let ctx_u2 = RequestContext::new("u2");

        svc.create_bot(&ctx_u1, create_req("Support", "sk-x", "u1"))
            .await
            .unwrap();

        assert_eq!(svc.list_bots(&ctx_u1).await.unwrap().len(), 1);
        assert!(svc.list_bots(&ctx_u2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_denied_caller_gets_unauthorized() {
        let svc = BotService::new(MemoryBotRepository::default(), DenyAll);
        let ctx = RequestContext::new("u1");

        let err = svc
            .create_bot(&ctx, create_req("Support", "sk-x", "u1"))
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::Unauthorized(_)));
    }
}
