//! Prefix command definitions.

use std::fmt;

use super::OptionSpec;
use crate::check::domain::CommandCheck;

/// A command invoked by a text prefix.
///
/// Definitions are built once and shared read-only between invocations.
#[derive(Clone)]
pub struct PrefixCommand {
    name: String,
    aliases: Vec<String>,
    description: String,
    options: Vec<OptionSpec>,
    checks: Vec<CommandCheck>,
}

impl PrefixCommand {
    /// Creates a command with no options or checks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            options: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Adds an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends an option. Options are parsed in the order they are added.
    #[must_use]
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a check.
    #[must_use]
    pub fn with_check(mut self, check: impl Into<CommandCheck>) -> Self {
        self.checks.push(check.into());
        self
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the aliases.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Looks up an option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.name() == name)
    }

    /// Returns the attached checks.
    #[must_use]
    pub fn checks(&self) -> &[CommandCheck] {
        &self.checks
    }

    /// Returns whether `invoked_with` is the name or an alias.
    ///
    /// With `case_insensitive` set, names are compared ignoring case.
    #[must_use]
    pub fn answers_to(&self, invoked_with: &str, case_insensitive: bool) -> bool {
        std::iter::once(&self.name)
            .chain(&self.aliases)
            .any(|candidate| {
                if case_insensitive {
                    candidate.to_lowercase() == invoked_with.to_lowercase()
                } else {
                    candidate == invoked_with
                }
            })
    }
}

impl fmt::Debug for PrefixCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixCommand")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("options", &self.options)
            .field("checks", &self.checks.len())
            .finish_non_exhaustive()
    }
}
