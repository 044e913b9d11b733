//! Entity cache and permission computation ports.
//!
//! The host client owns the object cache and the permission rules; checks
//! and converters only look things up through these traits.

use crate::context::domain::{ChannelId, Guild, GuildChannel, GuildId, Member, Permissions, UserId};

/// Read access to the host client's entity cache.
///
/// Every lookup returns `None` when the entity is not cached, for example
/// because caching is disabled or the relevant intents are missing.
pub trait EntityCache: Send + Sync {
    /// Resolves a guild.
    fn get_guild(&self, guild_id: GuildId) -> Option<Guild>;

    /// Resolves a channel that belongs to a guild.
    fn get_guild_channel(&self, channel_id: ChannelId) -> Option<GuildChannel>;

    /// Resolves a user's membership in a guild.
    fn get_member(&self, guild_id: GuildId, user_id: UserId) -> Option<Member>;

    /// Resolves the application's own membership in a guild.
    fn get_my_member(&self, guild_id: GuildId) -> Option<Member>;
}

/// Computes effective permissions for guild members.
pub trait PermissionCalculator: Send + Sync {
    /// Permissions granted to `member` by its roles alone.
    fn permissions_for(&self, member: &Member) -> Permissions;

    /// Permissions of `member` in `channel`.
    ///
    /// With `include_guild_permissions` the role permissions are combined with
    /// the channel overwrites; without it only the overwrites count.
    fn permissions_in(
        &self,
        channel: &GuildChannel,
        member: &Member,
        include_guild_permissions: bool,
    ) -> Permissions;
}
