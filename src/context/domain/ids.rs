//! Snowflake identifier types for platform entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseSnowflakeError;

macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its raw snowflake value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw snowflake value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseSnowflakeError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                value
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| ParseSnowflakeError(value.to_owned()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

snowflake_id!(
    /// Identifier of a user account (human, bot, or the application itself).
    UserId
);
snowflake_id!(
    /// Identifier of a guild.
    GuildId
);
snowflake_id!(
    /// Identifier of a channel, either in a guild or a direct message.
    ChannelId
);
snowflake_id!(
    /// Identifier of a guild role.
    RoleId
);
snowflake_id!(
    /// Identifier of a webhook that authored a message.
    WebhookId
);
