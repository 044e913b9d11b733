//! In-memory entity cache with explicit permission grants.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::context::{
    domain::{ChannelId, Guild, GuildChannel, GuildId, Member, Permissions, UserId},
    ports::{EntityCache, PermissionCalculator},
};

/// Thread-safe in-memory entity cache.
///
/// Permissions are not derived from roles and overwrites; they are granted
/// explicitly per member (role permissions) and per channel and member
/// (overwrites). Suitable for tests and for hosts that precompute grants.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityCache {
    state: Arc<RwLock<InMemoryCacheState>>,
}

#[derive(Debug, Default)]
struct InMemoryCacheState {
    guilds: HashMap<GuildId, Guild>,
    channels: HashMap<ChannelId, GuildChannel>,
    members: HashMap<(GuildId, UserId), Member>,
    my_user_id: Option<UserId>,
    role_grants: HashMap<(GuildId, UserId), Permissions>,
    overwrite_grants: HashMap<(ChannelId, UserId), Permissions>,
}

impl InMemoryEntityCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application's own user ID, used to resolve its members.
    pub fn set_my_user_id(&self, user_id: UserId) {
        self.write().my_user_id = Some(user_id);
    }

    /// Caches a guild.
    pub fn insert_guild(&self, guild: Guild) {
        self.write().guilds.insert(guild.id, guild);
    }

    /// Caches a guild channel.
    pub fn insert_channel(&self, channel: GuildChannel) {
        self.write().channels.insert(channel.id, channel);
    }

    /// Caches a guild member.
    pub fn insert_member(&self, member: Member) {
        self.write()
            .members
            .insert((member.guild_id, member.user_id), member);
    }

    /// Grants role permissions to a member.
    pub fn grant_role_permissions(&self, guild_id: GuildId, user_id: UserId, perms: Permissions) {
        *self
            .write()
            .role_grants
            .entry((guild_id, user_id))
            .or_default() |= perms;
    }

    /// Grants channel overwrite permissions to a member.
    pub fn grant_channel_permissions(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
        perms: Permissions,
    ) {
        *self
            .write()
            .overwrite_grants
            .entry((channel_id, user_id))
            .or_default() |= perms;
    }

    fn read(&self) -> RwLockReadGuard<'_, InMemoryCacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InMemoryCacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EntityCache for InMemoryEntityCache {
    fn get_guild(&self, guild_id: GuildId) -> Option<Guild> {
        self.read().guilds.get(&guild_id).cloned()
    }

    fn get_guild_channel(&self, channel_id: ChannelId) -> Option<GuildChannel> {
        self.read().channels.get(&channel_id).cloned()
    }

    fn get_member(&self, guild_id: GuildId, user_id: UserId) -> Option<Member> {
        self.read().members.get(&(guild_id, user_id)).cloned()
    }

    fn get_my_member(&self, guild_id: GuildId) -> Option<Member> {
        let state = self.read();
        let my_user_id = state.my_user_id?;
        state.members.get(&(guild_id, my_user_id)).cloned()
    }
}

impl PermissionCalculator for InMemoryEntityCache {
    fn permissions_for(&self, member: &Member) -> Permissions {
        self.read()
            .role_grants
            .get(&(member.guild_id, member.user_id))
            .copied()
            .unwrap_or_default()
    }

    fn permissions_in(
        &self,
        channel: &GuildChannel,
        member: &Member,
        include_guild_permissions: bool,
    ) -> Permissions {
        let state = self.read();
        let overwrites = state
            .overwrite_grants
            .get(&(channel.id, member.user_id))
            .copied()
            .unwrap_or_default();
        if !include_guild_permissions {
            return overwrites;
        }
        let roles = state
            .role_grants
            .get(&(channel.guild_id, member.user_id))
            .copied()
            .unwrap_or_default();
        roles | overwrites
    }
}
