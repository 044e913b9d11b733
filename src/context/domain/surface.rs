//! Invocation surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WebhookId;

/// Raw data of a message that invoked a prefix command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixMessage {
    /// Full message text, prefix and command name included.
    pub content: String,
    /// The prefix the message started with.
    pub prefix: String,
    /// The command name or alias that was typed after the prefix.
    pub invoked_with: String,
    /// Set when the message was sent through a webhook.
    pub webhook_id: Option<WebhookId>,
}

impl PrefixMessage {
    /// Creates prefix message data.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        prefix: impl Into<String>,
        invoked_with: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            prefix: prefix.into(),
            invoked_with: invoked_with.into(),
            webhook_id: None,
        }
    }

    /// Marks the message as sent by a webhook.
    #[must_use]
    pub const fn with_webhook(mut self, webhook_id: WebhookId) -> Self {
        self.webhook_id = Some(webhook_id);
        self
    }

    /// Number of code points occupied by the prefix and the invoked name.
    #[must_use]
    pub fn arguments_offset(&self) -> usize {
        self.prefix.chars().count() + self.invoked_with.chars().count()
    }
}

/// The surface a command was invoked through, with surface-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvocationSurface {
    /// A text message starting with a prefix.
    Prefix(PrefixMessage),
    /// A platform-native slash command.
    Slash,
    /// A message context-menu command.
    MessageCommand,
    /// A user context-menu command.
    UserCommand,
}

impl InvocationSurface {
    /// Returns the data-less kind of this surface.
    #[must_use]
    pub const fn kind(&self) -> SurfaceKind {
        match self {
            Self::Prefix(_) => SurfaceKind::Prefix,
            Self::Slash => SurfaceKind::Slash,
            Self::MessageCommand => SurfaceKind::MessageCommand,
            Self::UserCommand => SurfaceKind::UserCommand,
        }
    }

    /// Returns the prefix message data for prefix invocations.
    #[must_use]
    pub const fn prefix_message(&self) -> Option<&PrefixMessage> {
        match self {
            Self::Prefix(message) => Some(message),
            Self::Slash | Self::MessageCommand | Self::UserCommand => None,
        }
    }
}

/// Discriminant of [`InvocationSurface`], used to select check callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Prefix text command.
    Prefix,
    /// Slash command.
    Slash,
    /// Message context-menu command.
    MessageCommand,
    /// User context-menu command.
    UserCommand,
}

impl SurfaceKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Slash => "slash",
            Self::MessageCommand => "message_command",
            Self::UserCommand => "user_command",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
