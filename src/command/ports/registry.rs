//! Command registry port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::PrefixCommand;

/// Result type for command registry operations.
pub type CommandRegistryResult<T> = Result<T, CommandRegistryError>;

/// Lookup contract for registered prefix commands.
#[async_trait]
pub trait CommandRegistry: Send + Sync {
    /// Registers a command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandRegistryError::InvalidDefinition`] when the command's
    /// name or an alias is already taken ignoring case, or its option names
    /// repeat.
    async fn register(&self, command: PrefixCommand) -> CommandRegistryResult<Arc<PrefixCommand>>;

    /// Finds the command answering to `invoked_with` by name or alias.
    ///
    /// Registered names never collide ignoring case, so at most one command
    /// answers in either mode.
    async fn find_by_name(
        &self,
        invoked_with: &str,
        case_insensitive: bool,
    ) -> CommandRegistryResult<Option<Arc<PrefixCommand>>>;

    /// Returns every registered command in registration order.
    async fn list(&self) -> CommandRegistryResult<Vec<Arc<PrefixCommand>>>;
}

/// Errors returned by command registry implementations.
#[derive(Debug, Clone, Error)]
pub enum CommandRegistryError {
    /// The command definition conflicts with itself or a registered command.
    #[error("invalid definition for command '{command}': {reason}")]
    InvalidDefinition {
        /// Name of the rejected command.
        command: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The registry backend failed.
    #[error("command registry unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommandRegistryError {
    /// Creates an [`CommandRegistryError::InvalidDefinition`] error.
    #[must_use]
    pub fn invalid_definition(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
