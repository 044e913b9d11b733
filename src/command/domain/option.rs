//! Option specifications.

use serde_json::Value;

use super::ConverterRef;

/// How an option consumes message text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OptionModifier {
    /// Consumes one (optionally quoted) word.
    #[default]
    None,
    /// Consumes the rest of the message verbatim.
    ConsumeRest,
    /// Consumes as many convertible words as possible into a list.
    Greedy,
}

/// Describes one argument a command expects.
///
/// Options are required unless given a default or marked optional. A
/// [`OptionModifier::ConsumeRest`] or [`OptionModifier::Greedy`] option is
/// expected to be declared last.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    name: String,
    description: String,
    arg_type: ConverterRef,
    required: bool,
    default: Value,
    modifier: OptionModifier,
}

impl OptionSpec {
    /// Creates a required option converted with `arg_type`.
    #[must_use]
    pub fn new(name: impl Into<String>, arg_type: ConverterRef) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            arg_type,
            required: true,
            default: Value::Null,
            modifier: OptionModifier::None,
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Makes the option optional, falling back to `default`.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.required = false;
        self.default = default.into();
        self
    }

    /// Makes the option optional with a `null` default.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the consumption modifier.
    #[must_use]
    pub const fn with_modifier(mut self, modifier: OptionModifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Returns the option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the converter reference.
    #[must_use]
    pub const fn arg_type(&self) -> &ConverterRef {
        &self.arg_type
    }

    /// Returns whether the option must be supplied.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the value stored when the option is absent.
    #[must_use]
    pub const fn default_value(&self) -> &Value {
        &self.default
    }

    /// Returns the consumption modifier.
    #[must_use]
    pub const fn modifier(&self) -> OptionModifier {
        self.modifier
    }
}
