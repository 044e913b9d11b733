//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use filament::command::{
    adapters::memory::InMemoryCommandRegistry,
    domain::{PrefixCommand, PrefixConfig},
    services::{PrefixCommandService, PrefixInvocationRequest},
};
use filament::context::{
    adapters::memory::{InMemoryEntityCache, StaticOwnerDirectory},
    domain::{Author, ChannelId, Guild, GuildChannel, GuildId, Member, UserId},
    services::App,
};
use rstest::fixture;

/// Guild used by every scenario.
pub const GUILD_ID: GuildId = GuildId::new(10);
/// Text channel inside [`GUILD_ID`].
pub const CHANNEL_ID: ChannelId = ChannelId::new(20);
/// The human invoking commands.
pub const AUTHOR_ID: UserId = UserId::new(30);
/// The application's own user.
pub const BOT_ID: UserId = UserId::new(40);
/// The application owner.
pub const OWNER_ID: UserId = UserId::new(50);

/// Service type used by the integration tests.
pub type TestService = PrefixCommandService<InMemoryCommandRegistry>;

/// Provides a cache holding one guild, its channel, and both members.
#[fixture]
pub fn cache() -> InMemoryEntityCache {
    let cache = InMemoryEntityCache::new();
    cache.set_my_user_id(BOT_ID);
    cache.insert_guild(Guild::new(GUILD_ID, OWNER_ID));
    cache.insert_channel(GuildChannel::new(CHANNEL_ID, GUILD_ID, "lobby"));
    cache.insert_member(Member::new(BOT_ID, GUILD_ID));
    cache.insert_member(Member::new(AUTHOR_ID, GUILD_ID));
    cache
}

/// Builds an application handle over `cache` whose owner is [`OWNER_ID`].
#[must_use]
pub fn app(cache: &InMemoryEntityCache) -> Arc<App> {
    Arc::new(App::new(
        Arc::new(cache.clone()),
        Arc::new(cache.clone()),
        Arc::new(StaticOwnerDirectory::new([OWNER_ID])),
    ))
}

/// Registers `commands` and builds a service with the default `!` prefix.
///
/// # Errors
///
/// Returns an error if a command definition is rejected.
pub async fn service(
    cache: &InMemoryEntityCache,
    commands: Vec<PrefixCommand>,
) -> eyre::Result<TestService> {
    let registry = InMemoryCommandRegistry::with_commands(commands).await?;
    Ok(PrefixCommandService::new(
        Arc::new(registry),
        app(cache),
        PrefixConfig::default(),
    ))
}

/// A guild message from `author` with the given content.
#[must_use]
pub fn guild_message(content: &str, author: UserId) -> PrefixInvocationRequest {
    PrefixInvocationRequest::new(content, Author::human(author), CHANNEL_ID)
        .in_guild(GUILD_ID, Some(Member::new(author, GUILD_ID)))
}
