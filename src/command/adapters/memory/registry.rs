//! In-memory command registry.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::command::{
    domain::PrefixCommand,
    ports::{CommandRegistry, CommandRegistryError, CommandRegistryResult},
};

/// Thread-safe in-memory command registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommandRegistry {
    state: Arc<RwLock<Vec<Arc<PrefixCommand>>>>,
}

impl InMemoryCommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `commands`.
    ///
    /// # Errors
    ///
    /// Returns the first definition conflict found.
    pub async fn with_commands(
        commands: impl IntoIterator<Item = PrefixCommand>,
    ) -> CommandRegistryResult<Self> {
        let registry = Self::new();
        for command in commands {
            registry.register(command).await?;
        }
        Ok(registry)
    }
}

fn validate_options(command: &PrefixCommand) -> CommandRegistryResult<()> {
    let mut seen = HashSet::new();
    for option in command.options() {
        if !seen.insert(option.name()) {
            return Err(CommandRegistryError::invalid_definition(
                command.name(),
                format!("duplicate option name '{}'", option.name()),
            ));
        }
    }
    Ok(())
}

fn validate_names(
    registered: &[Arc<PrefixCommand>],
    command: &PrefixCommand,
) -> CommandRegistryResult<()> {
    if command.name().is_empty() {
        return Err(CommandRegistryError::invalid_definition(
            command.name(),
            "command name must not be empty",
        ));
    }
    let mut own = HashSet::new();
    for name in std::iter::once(command.name()).chain(command.aliases().iter().map(String::as_str))
    {
        if !own.insert(name.to_lowercase()) {
            return Err(CommandRegistryError::invalid_definition(
                command.name(),
                format!("name or alias '{name}' is repeated"),
            ));
        }
        if registered.iter().any(|existing| existing.answers_to(name, true)) {
            return Err(CommandRegistryError::invalid_definition(
                command.name(),
                format!("name or alias '{name}' is already registered"),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl CommandRegistry for InMemoryCommandRegistry {
    async fn register(&self, command: PrefixCommand) -> CommandRegistryResult<Arc<PrefixCommand>> {
        validate_options(&command)?;
        let mut state = self.state.write().map_err(|err| {
            CommandRegistryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        validate_names(&state, &command)?;

        let stored = Arc::new(command);
        state.push(Arc::clone(&stored));
        Ok(stored)
    }

    async fn find_by_name(
        &self,
        invoked_with: &str,
        case_insensitive: bool,
    ) -> CommandRegistryResult<Option<Arc<PrefixCommand>>> {
        let state = self.state.read().map_err(|err| {
            CommandRegistryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .iter()
            .find(|command| command.answers_to(invoked_with, case_insensitive))
            .cloned())
    }

    async fn list(&self) -> CommandRegistryResult<Vec<Arc<PrefixCommand>>> {
        let state = self.state.read().map_err(|err| {
            CommandRegistryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }
}
