//! Per-invocation context.

use std::sync::Arc;

use super::{
    Attachment, Author, ChannelId, Guild, GuildChannel, GuildId, InvocationSurface, Member,
    OptionBag, PrefixMessage, SurfaceKind,
};
use crate::command::domain::PrefixCommand;
use crate::context::services::App;

/// Everything known about one command invocation.
///
/// Checks read it; the argument parser additionally writes converted values
/// into its [`OptionBag`].
#[derive(Debug)]
pub struct Context {
    app: Arc<App>,
    surface: InvocationSurface,
    author: Author,
    channel_id: ChannelId,
    guild_id: Option<GuildId>,
    member: Option<Member>,
    attachments: Vec<Attachment>,
    command: Option<Arc<PrefixCommand>>,
    options: OptionBag,
}

impl Context {
    /// Starts building a context for an invocation in `channel_id`.
    ///
    /// The context describes a direct-message invocation until
    /// [`ContextBuilder::in_guild`] is called.
    #[must_use]
    pub fn builder(
        app: Arc<App>,
        surface: InvocationSurface,
        author: Author,
        channel_id: ChannelId,
    ) -> ContextBuilder {
        ContextBuilder {
            context: Self {
                app,
                surface,
                author,
                channel_id,
                guild_id: None,
                member: None,
                attachments: Vec::new(),
                command: None,
                options: OptionBag::new(),
            },
        }
    }

    /// Returns the application handle.
    #[must_use]
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Returns the invocation surface.
    #[must_use]
    pub const fn surface(&self) -> &InvocationSurface {
        &self.surface
    }

    /// Returns the data-less surface kind.
    #[must_use]
    pub const fn surface_kind(&self) -> SurfaceKind {
        self.surface.kind()
    }

    /// Returns the invoking message for prefix invocations.
    #[must_use]
    pub const fn prefix_message(&self) -> Option<&PrefixMessage> {
        self.surface.prefix_message()
    }

    /// Returns the invoking author.
    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the channel the invocation happened in.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Returns the guild, or `None` for direct messages.
    #[must_use]
    pub const fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    /// Returns the invoking member when the invocation happened in a guild.
    #[must_use]
    pub const fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    /// Returns the attachments of the invoking message.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the matched command, if any.
    #[must_use]
    pub fn command(&self) -> Option<&PrefixCommand> {
        self.command.as_deref()
    }

    /// Returns the converted options.
    #[must_use]
    pub const fn options(&self) -> &OptionBag {
        &self.options
    }

    pub(crate) const fn options_mut(&mut self) -> &mut OptionBag {
        &mut self.options
    }

    /// Resolves the invoking channel from the entity cache.
    ///
    /// Returns `None` for direct-message channels and for uncached channels.
    #[must_use]
    pub fn get_channel(&self) -> Option<GuildChannel> {
        self.app.cache().get_guild_channel(self.channel_id)
    }

    /// Resolves the invoking guild from the entity cache.
    #[must_use]
    pub fn get_guild(&self) -> Option<Guild> {
        self.guild_id
            .and_then(|guild_id| self.app.cache().get_guild(guild_id))
    }

    /// Resolves the application's own member in the invoking guild.
    #[must_use]
    pub fn get_my_member(&self) -> Option<Member> {
        self.guild_id
            .and_then(|guild_id| self.app.cache().get_my_member(guild_id))
    }
}

/// Builder for [`Context`].
#[derive(Debug)]
pub struct ContextBuilder {
    context: Context,
}

impl ContextBuilder {
    /// Places the invocation in a guild, optionally with the invoking member.
    #[must_use]
    pub fn in_guild(mut self, guild_id: GuildId, member: Option<Member>) -> Self {
        self.context.guild_id = Some(guild_id);
        self.context.member = member;
        self
    }

    /// Sets the attachments of the invoking message.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.context.attachments = attachments.into_iter().collect();
        self
    }

    /// Sets the matched command.
    #[must_use]
    pub fn with_command(mut self, command: Arc<PrefixCommand>) -> Self {
        self.context.command = Some(command);
        self
    }

    /// Finishes the context.
    #[must_use]
    pub fn build(self) -> Context {
        self.context
    }
}
