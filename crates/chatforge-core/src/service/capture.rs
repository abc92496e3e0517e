//! Capture service: read access to widget-captured leads and messages.
//!
//! The widget runtime appends these records through the repository ports;
//! this service exposes the owner-facing listings with the ordering the
//! dashboard relies on (leads newest-first, messages in conversation order).

use chatforge_types::bot::BotId;
use chatforge_types::error::BotError;
use chatforge_types::lead::Lead;
use chatforge_types::message::Message;

use crate::auth::{Action, Authorizer};
use crate::repository::bot::BotRepository;
use crate::repository::lead::LeadRepository;
use crate::repository::message::MessageRepository;
use crate::service::context::RequestContext;

pub struct CaptureService<B, L, M, A>
where
    B: BotRepository,
    L: LeadRepository,
    M: MessageRepository,
    A: Authorizer,
{
    bot_repo: B,
    lead_repo: L,
    message_repo: M,
    authorizer: A,
}

impl<B, L, M, A> CaptureService<B, L, M, A>
where
    B: BotRepository,
    L: LeadRepository,
    M: MessageRepository,
    A: Authorizer,
{
    pub fn new(bot_repo: B, lead_repo: L, message_repo: M, authorizer: A) -> Self {
        Self {
            bot_repo,
            lead_repo,
            message_repo,
            authorizer,
        }
    }

    /// List a bot's captured leads, newest first.
    ///
    /// The bot must exist; an existing bot with no leads yields an empty
    /// list.
    pub async fn list_leads(
        &self,
        ctx: &RequestContext,
        bot_id: &BotId,
    ) -> Result<Vec<Lead>, BotError> {
        let bot = self
            .bot_repo
            .get_by_id(bot_id)
            .await?
            .ok_or(BotError::NotFound)?;
        self.check(&bot.owner_id, Action::ViewLeads).await?;

        let leads = self.lead_repo.list_by_bot(bot_id).await?;
        tracing::debug!(
            request_id = %ctx.request_id,
            bot_id = %bot_id,
            count = leads.len(),
            "listed leads"
        );
        Ok(leads)
    }

    /// List a bot's conversation transcript in chronological order.
    pub async fn list_messages(
        &self,
        ctx: &RequestContext,
        bot_id: &BotId,
    ) -> Result<Vec<Message>, BotError> {
        let bot = self
            .bot_repo
            .get_by_id(bot_id)
            .await?
            .ok_or(BotError::NotFound)?;
        self.check(&bot.owner_id, Action::ViewMessages).await?;

        let messages = self.message_repo.list_by_bot(bot_id).await?;
        tracing::debug!(
            request_id = %ctx.request_id,
            bot_id = %bot_id,
            count = messages.len(),
            "listed messages"
        );
        Ok(messages)
    }

    /// Append a lead. Used by the (external) widget ingestion path and by
    /// tests; not exposed over the HTTP surface.
    pub async fn record_lead(&self, lead: &Lead) -> Result<(), BotError> {
        Ok(self.lead_repo.append(lead).await?)
    }

    /// Append a conversation message. Same posture as `record_lead`.
    pub async fn record_message(&self, message: &Message) -> Result<(), BotError> {
        Ok(self.message_repo.append(message).await?)
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
