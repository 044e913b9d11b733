//! Permission bit set.
//!
//! Effective permissions are computed outside this crate (see
//! [`crate::context::ports::PermissionCalculator`]); checks only combine and
//! compare the resulting bits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of platform permission flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(u64);

macro_rules! permission_flags {
    ($($(#[$meta:meta])* $name:ident = $bit:expr;)*) => {
        impl Permissions {
            $(
                $(#[$meta])*
                pub const $name: Self = Self(1 << $bit);
            )*

            const NAMED: &'static [(&'static str, Self)] = &[
                $((stringify!($name), Self::$name),)*
            ];
        }
    };
}

permission_flags! {
    /// Create invites to a channel.
    CREATE_INSTANT_INVITE = 0;
    /// Kick members from the guild.
    KICK_MEMBERS = 1;
    /// Ban members from the guild.
    BAN_MEMBERS = 2;
    /// Bypass every permission check and channel overwrite.
    ADMINISTRATOR = 3;
    /// Manage and edit channels.
    MANAGE_CHANNELS = 4;
    /// Manage and edit the guild.
    MANAGE_GUILD = 5;
    /// Add reactions to messages.
    ADD_REACTIONS = 6;
    /// View the guild audit log.
    VIEW_AUDIT_LOG = 7;
    /// Use priority speaker in voice channels.
    PRIORITY_SPEAKER = 8;
    /// Stream video in voice channels.
    STREAM = 9;
    /// View a channel.
    VIEW_CHANNEL = 10;
    /// Send messages in a channel.
    SEND_MESSAGES = 11;
    /// Send text-to-speech messages.
    SEND_TTS_MESSAGES = 12;
    /// Delete and pin other members' messages.
    MANAGE_MESSAGES = 13;
    /// Embed links in messages.
    EMBED_LINKS = 14;
    /// Upload files.
    ATTACH_FILES = 15;
    /// Read message history.
    READ_MESSAGE_HISTORY = 16;
    /// Mention `@everyone` and `@here`.
    MENTION_EVERYONE = 17;
    /// Use emojis from other guilds.
    USE_EXTERNAL_EMOJIS = 18;
    /// View guild insights.
    VIEW_GUILD_INSIGHTS = 19;
    /// Connect to voice channels.
    CONNECT = 20;
    /// Speak in voice channels.
    SPEAK = 21;
    /// Mute members in voice channels.
    MUTE_MEMBERS = 22;
    /// Deafen members in voice channels.
    DEAFEN_MEMBERS = 23;
    /// Move members between voice channels.
    MOVE_MEMBERS = 24;
    /// Use voice activity detection.
    USE_VOICE_ACTIVITY = 25;
    /// Change one's own nickname.
    CHANGE_NICKNAME = 26;
    /// Change other members' nicknames.
    MANAGE_NICKNAMES = 27;
    /// Manage roles below one's highest role.
    MANAGE_ROLES = 28;
    /// Manage webhooks.
    MANAGE_WEBHOOKS = 29;
    /// Manage guild emojis and stickers.
    MANAGE_EMOJIS_AND_STICKERS = 30;
    /// Use application commands.
    USE_APPLICATION_COMMANDS = 31;
}

impl Permissions {
    /// The empty permission set.
    pub const NONE: Self = Self(0);

    /// Creates a permission set from raw bits. Unknown bits are preserved.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns `true` when no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when every flag in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the flags of `self` that are not present in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the names of the known flags contained in this set.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
    }
}

impl BitOr for Permissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Permissions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Permissions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Permissions {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Permissions {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl FromIterator<Self> for Permissions {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |acc, flag| acc | flag)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let names: Vec<&str> = self.names().collect();
        if names.is_empty() {
            return write!(f, "{:#x}", self.0);
        }
        f.write_str(&names.join(" | "))
    }
}
