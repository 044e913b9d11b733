//! Check failures and evaluation errors.

use std::sync::Arc;
use thiserror::Error;

use crate::context::domain::{Permissions, RoleId};
use crate::context::ports::OwnerDirectoryError;

/// A check denied the invocation.
///
/// Each variant is a distinct denial reason so callers can render a tailored
/// response.
#[derive(Debug, Clone, Error)]
pub enum CheckFailure {
    /// A check returned `false` without naming a reason.
    #[error("Check '{check}' failed")]
    Failed {
        /// Name of the check.
        check: String,
    },

    /// A user-defined check denied the invocation.
    #[error("{0}")]
    Custom(String),

    /// The author is not an owner of the application.
    #[error("You are not the owner of this bot")]
    NotOwner,

    /// The command was invoked outside a guild.
    #[error("This command can only be used in a guild")]
    OnlyInGuild,

    /// The command was invoked inside a guild.
    #[error("This command can only be used in DMs")]
    OnlyInDm,

    /// The author is not a bot.
    #[error("This command can only be used by bots")]
    BotOnly,

    /// The author is a bot or the message was sent by a webhook.
    #[error("This command can only be used by humans")]
    HumanOnly,

    /// The message was not sent by a webhook.
    #[error("This command can only be used by webhooks")]
    WebhookOnly,

    /// The channel is not flagged NSFW.
    #[error("This command can only be used in NSFW channels")]
    NsfwChannelOnly,

    /// The invoking member lacks required roles.
    #[error("You are missing one or more roles required in order to run this command")]
    MissingRequiredRole {
        /// Required roles the member does not have.
        missing: Vec<RoleId>,
    },

    /// The invoking member lacks required permissions.
    #[error("You are missing one or more permissions required in order to run this command")]
    MissingRequiredPermission {
        /// Required permissions not in the effective set.
        missing: Permissions,
    },

    /// The application's own member lacks required permissions.
    #[error("The bot is missing one or more permissions required in order to run this command")]
    BotMissingRequiredPermission {
        /// Required permissions not in the effective set.
        missing: Permissions,
    },

    /// The message lacks a required attachment.
    #[error("Missing attachment(s) required to run the command")]
    MissingRequiredAttachment,

    /// A check could not be evaluated; recorded while evaluating an exclusive
    /// group.
    #[error("{source}")]
    Errored {
        /// The evaluation error.
        #[source]
        source: Arc<CheckError>,
    },

    /// Every member of an exclusive group failed.
    #[error("None of the exclusive checks passed: {}", join_messages(.0))]
    Exclusive(Vec<Self>),
}

impl CheckFailure {
    /// Creates a [`CheckFailure::Custom`] failure.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Creates a [`CheckFailure::Failed`] failure for the named check.
    #[must_use]
    pub fn failed(check: impl Into<String>) -> Self {
        Self::Failed {
            check: check.into(),
        }
    }

    /// Returns the missing permissions carried by permission failures.
    #[must_use]
    pub const fn missing_permissions(&self) -> Option<Permissions> {
        match self {
            Self::MissingRequiredPermission { missing }
            | Self::BotMissingRequiredPermission { missing } => Some(*missing),
            _ => None,
        }
    }
}

fn join_messages(failures: &[CheckFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors returned when evaluating a check.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    /// The check denied the invocation.
    #[error(transparent)]
    Failed(#[from] CheckFailure),

    /// An entity needed by the check is not cached.
    #[error("Some objects required for this check could not be resolved from the cache: {entity}")]
    InsufficientCache {
        /// The unresolved entity.
        entity: &'static str,
    },

    /// The application owners could not be fetched.
    #[error("failed to resolve application owners: {0}")]
    OwnerLookup(#[from] OwnerDirectoryError),

    /// Any other error raised by a check.
    #[error("check raised an error: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl CheckError {
    /// Creates an [`CheckError::InsufficientCache`] error.
    #[must_use]
    pub const fn insufficient_cache(entity: &'static str) -> Self {
        Self::InsufficientCache { entity }
    }

    /// Wraps an arbitrary error.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }

    /// Returns the failure when the check denied the invocation.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&CheckFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Converts the error into a failure, wrapping non-denials.
    #[must_use]
    pub fn into_failure(self) -> CheckFailure {
        match self {
            Self::Failed(failure) => failure,
            other => CheckFailure::Errored {
                source: Arc::new(other),
            },
        }
    }
}
