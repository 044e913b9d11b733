//! Shared world state for prefix invocation BDD scenarios.

use std::sync::Arc;

use filament::check::services::builtins::{has_channel_permissions, owner_only};
use filament::command::{
    adapters::{
        converters::{to_integer, to_string},
        memory::InMemoryCommandRegistry,
    },
    domain::{OptionModifier, OptionSpec, PrefixCommand},
    services::{InvocationResult, PrefixCommandService},
};
use filament::context::{
    adapters::memory::{InMemoryEntityCache, StaticOwnerDirectory},
    domain::{ChannelId, Context, Guild, GuildChannel, GuildId, Member, Permissions, UserId},
    services::App,
};
use rstest::fixture;

/// Guild every scenario message is sent in.
pub const GUILD_ID: GuildId = GuildId::new(1);
/// Channel every scenario message is sent in.
pub const CHANNEL_ID: ChannelId = ChannelId::new(2);
/// The ordinary member sending messages.
pub const MEMBER_ID: UserId = UserId::new(3);
/// The application owner.
pub const OWNER_ID: UserId = UserId::new(4);

/// Service type used by the BDD world.
pub type TestService = PrefixCommandService<InMemoryCommandRegistry>;

/// Scenario world for prefix invocation behaviour tests.
pub struct PrefixInvocationWorld {
    pub cache: InMemoryEntityCache,
    pub service: Option<TestService>,
    pub last_result: Option<InvocationResult<Option<Context>>>,
}

impl PrefixInvocationWorld {
    /// Creates a world with a cached guild and no service.
    #[must_use]
    pub fn new() -> Self {
        let cache = InMemoryEntityCache::new();
        cache.insert_guild(Guild::new(GUILD_ID, OWNER_ID));
        cache.insert_channel(GuildChannel::new(CHANNEL_ID, GUILD_ID, "general"));
        cache.insert_member(Member::new(MEMBER_ID, GUILD_ID));
        Self {
            cache,
            service: None,
            last_result: None,
        }
    }

    /// Builds an application handle over the world's cache.
    #[must_use]
    pub fn app(&self) -> Arc<App> {
        Arc::new(App::new(
            Arc::new(self.cache.clone()),
            Arc::new(self.cache.clone()),
            Arc::new(StaticOwnerDirectory::new([OWNER_ID])),
        ))
    }
}

impl Default for PrefixInvocationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PrefixInvocationWorld {
    PrefixInvocationWorld::default()
}

/// Looks up one of the commands used by the scenarios.
#[must_use]
pub fn scenario_command(name: &str) -> Option<PrefixCommand> {
    let command = match name {
        "remind" => PrefixCommand::new("remind")
            .with_option(OptionSpec::new("minutes", to_integer()))
            .with_option(OptionSpec::new("message", to_string())),
        "sum" => PrefixCommand::new("sum")
            .with_option(
                OptionSpec::new("numbers", to_integer()).with_modifier(OptionModifier::Greedy),
            )
            .with_option(OptionSpec::new("label", to_string()).with_default("total")),
        "shutdown" => PrefixCommand::new("shutdown").with_check(owner_only()),
        "purge" => PrefixCommand::new("purge")
            .with_check(owner_only() | has_channel_permissions(Permissions::MANAGE_MESSAGES))
            .with_option(OptionSpec::new("count", to_integer())),
        _ => return None,
    };
    Some(command)
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
