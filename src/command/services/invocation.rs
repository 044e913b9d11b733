//! Prefix invocation: prefix matching, command lookup, checks and arguments.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

use crate::check::{domain::CheckError, services::run_checks};
use crate::command::{
    domain::{ArgumentError, PrefixConfig},
    ports::{CommandRegistry, CommandRegistryError},
    services::parse_arguments,
};
use crate::context::{
    domain::{
        Attachment, Author, ChannelId, Context, GuildId, InvocationSurface, Member, PrefixMessage,
        WebhookId,
    },
    services::App,
};

/// An incoming text message that may invoke a prefix command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixInvocationRequest {
    content: String,
    author: Author,
    channel_id: ChannelId,
    guild: Option<(GuildId, Option<Member>)>,
    attachments: Vec<Attachment>,
    webhook_id: Option<WebhookId>,
}

impl PrefixInvocationRequest {
    /// Creates a request for a direct message.
    #[must_use]
    pub fn new(content: impl Into<String>, author: Author, channel_id: ChannelId) -> Self {
        Self {
            content: content.into(),
            author,
            channel_id,
            guild: None,
            attachments: Vec::new(),
            webhook_id: None,
        }
    }

    /// Places the message in a guild, optionally with the author's member.
    #[must_use]
    pub fn in_guild(mut self, guild_id: GuildId, member: Option<Member>) -> Self {
        self.guild = Some((guild_id, member));
        self
    }

    /// Sets the message attachments.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Marks the message as sent by a webhook.
    #[must_use]
    pub const fn with_webhook(mut self, webhook_id: WebhookId) -> Self {
        self.webhook_id = Some(webhook_id);
        self
    }
}

/// Errors raised while handling a prefix invocation.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The message named a command that is not registered.
    #[error("no command named '{invoked_with}'")]
    CommandNotFound {
        /// The name typed after the prefix.
        invoked_with: String,
    },

    /// The command registry failed.
    #[error(transparent)]
    Registry(#[from] CommandRegistryError),

    /// A check denied the invocation or could not be evaluated.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// The arguments could not be parsed.
    #[error(transparent)]
    Arguments(#[from] ArgumentError),
}

/// Result type for prefix invocations.
pub type InvocationResult<T> = Result<T, InvocationError>;

/// Routes prefix messages to registered commands.
#[derive(Clone)]
pub struct PrefixCommandService<R>
where
    R: CommandRegistry,
{
    registry: Arc<R>,
    app: Arc<App>,
    config: PrefixConfig,
}

impl<R> PrefixCommandService<R>
where
    R: CommandRegistry,
{
    /// Creates a service resolving commands through `registry`.
    #[must_use]
    pub const fn new(registry: Arc<R>, app: Arc<App>, config: PrefixConfig) -> Self {
        Self {
            registry,
            app,
            config,
        }
    }

    /// Returns the prefix configuration.
    #[must_use]
    pub const fn config(&self) -> &PrefixConfig {
        &self.config
    }

    /// Prepares a command invocation from a message.
    ///
    /// Returns `Ok(None)` when the message is not a command invocation: it
    /// comes from an ignored bot, lacks a configured prefix, or has no name
    /// directly after the prefix. Otherwise the matched command's checks run
    /// first, then its arguments are parsed into the returned context.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::CommandNotFound`] for unknown names, and
    /// the registry, check or argument error that stopped the invocation.
    pub async fn prepare(
        &self,
        request: PrefixInvocationRequest,
    ) -> InvocationResult<Option<Context>> {
        if self.config.ignore_bots && request.author.is_bot {
            trace!(author = %request.author.id, "ignoring message from bot");
            return Ok(None);
        }
        let Some(prefix) = self.config.matching_prefix(&request.content) else {
            return Ok(None);
        };
        let invoked_with = request
            .content
            .strip_prefix(prefix)
            .and_then(|rest| rest.split(char::is_whitespace).next())
            .unwrap_or_default();
        if invoked_with.is_empty() {
            return Ok(None);
        }

        let command = self
            .registry
            .find_by_name(invoked_with, self.config.case_insensitive)
            .await?
            .ok_or_else(|| InvocationError::CommandNotFound {
                invoked_with: invoked_with.to_owned(),
            })?;
        debug!(command = command.name(), invoked_with, "matched prefix command");

        let mut message = PrefixMessage::new(request.content.as_str(), prefix, invoked_with);
        if let Some(webhook_id) = request.webhook_id {
            message = message.with_webhook(webhook_id);
        }
        let mut builder = Context::builder(
            Arc::clone(&self.app),
            InvocationSurface::Prefix(message),
            request.author,
            request.channel_id,
        )
        .with_attachments(request.attachments)
        .with_command(Arc::clone(&command));
        if let Some((guild_id, member)) = request.guild {
            builder = builder.in_guild(guild_id, member);
        }
        let mut context = builder.build();

        run_checks(command.checks(), &context).await?;
        parse_arguments(&mut context, None).await?;
        Ok(Some(context))
    }
}
