//! Argument parsing errors.

use thiserror::Error;

use super::{ConversionError, OptionSpec};

/// Errors raised while filling a command's options from message text.
#[derive(Debug, Clone, Error)]
pub enum ArgumentError {
    /// One or more required options had no remaining text.
    #[error("command invocation is missing required arguments: {}", option_names(.missing))]
    NotEnoughArguments {
        /// The first missing option followed by every later required option.
        missing: Vec<OptionSpec>,
    },

    /// A required option's text could not be converted.
    #[error("conversion failed for option '{}'", .option.name())]
    ConverterFailure {
        /// Option that failed to convert.
        option: Box<OptionSpec>,
        /// Error reported by the converter.
        #[source]
        source: ConversionError,
    },

    /// A quoted word has no closing quote.
    #[error("expected a closing quote for the quote at position {position}")]
    UnterminatedQuote {
        /// Code-point offset of the opening quote.
        position: usize,
    },

    /// A closing quote is directly followed by a non-whitespace character.
    #[error("expected whitespace after the closing quote at position {position}")]
    ExpectedWhitespaceAfterQuote {
        /// Code-point offset of the offending character.
        position: usize,
    },

    /// No explicit arguments were given and the invocation has no message text.
    #[error("invocation has no prefix message content to parse")]
    MissingMessageContent,
}

impl ArgumentError {
    /// Returns whether the error comes from malformed quoting.
    #[must_use]
    pub const fn is_malformed_quoting(&self) -> bool {
        matches!(
            self,
            Self::UnterminatedQuote { .. } | Self::ExpectedWhitespaceAfterQuote { .. }
        )
    }

    /// Names of the missing options, empty for other errors.
    #[must_use]
    pub fn missing_option_names(&self) -> Vec<&str> {
        match self {
            Self::NotEnoughArguments { missing } => missing.iter().map(OptionSpec::name).collect(),
            _ => Vec::new(),
        }
    }
}

fn option_names(options: &[OptionSpec]) -> String {
    options
        .iter()
        .map(OptionSpec::name)
        .collect::<Vec<_>>()
        .join(", ")
}
