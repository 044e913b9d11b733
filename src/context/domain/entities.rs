//! Minimal platform entities consumed by checks and converters.
//!
//! These are snapshots of the host client's object model, reduced to the
//! fields this crate reads.

use serde::{Deserialize, Serialize};

use super::{ChannelId, GuildId, RoleId, UserId};

/// The entity that triggered an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Account identifier.
    pub id: UserId,
    /// Whether the account is a bot account.
    pub is_bot: bool,
}

impl Author {
    /// Creates a human author.
    #[must_use]
    pub const fn human(id: UserId) -> Self {
        Self { id, is_bot: false }
    }

    /// Creates a bot author.
    #[must_use]
    pub const fn bot(id: UserId) -> Self {
        Self { id, is_bot: true }
    }
}

/// A cached guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// Guild identifier.
    pub id: GuildId,
    /// Identifier of the guild owner.
    pub owner_id: UserId,
}

impl Guild {
    /// Creates a guild snapshot.
    #[must_use]
    pub const fn new(id: GuildId, owner_id: UserId) -> Self {
        Self { id, owner_id }
    }
}

/// A cached channel belonging to a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildChannel {
    /// Channel identifier.
    pub id: ChannelId,
    /// Owning guild.
    pub guild_id: GuildId,
    /// Channel name without the leading `#`.
    pub name: String,
    /// Whether the channel is flagged as NSFW.
    pub is_nsfw: bool,
}

impl GuildChannel {
    /// Creates a non-NSFW guild channel.
    #[must_use]
    pub fn new(id: ChannelId, guild_id: GuildId, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
            is_nsfw: false,
        }
    }

    /// Marks the channel as NSFW.
    #[must_use]
    pub const fn nsfw(mut self) -> Self {
        self.is_nsfw = true;
        self
    }
}

/// A user's membership in a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's account identifier.
    pub user_id: UserId,
    /// The guild the membership belongs to.
    pub guild_id: GuildId,
    /// Roles assigned to the member.
    #[serde(default)]
    pub role_ids: Vec<RoleId>,
}

impl Member {
    /// Creates a member without roles.
    #[must_use]
    pub const fn new(user_id: UserId, guild_id: GuildId) -> Self {
        Self {
            user_id,
            guild_id,
            role_ids: Vec::new(),
        }
    }

    /// Sets the member's roles.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.role_ids = roles.into_iter().collect();
        self
    }

    /// Returns whether the member holds `role`.
    #[must_use]
    pub fn has_role(&self, role: RoleId) -> bool {
        self.role_ids.contains(&role)
    }
}

/// A file attached to the invoking message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Uploaded file name including its extension.
    pub filename: String,
}

impl Attachment {
    /// Creates an attachment record.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}
