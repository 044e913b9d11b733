//! Domain model for prefix commands and their arguments.

mod config;
mod converter;
mod cursor;
mod definition;
mod error;
mod option;

pub use config::PrefixConfig;
pub use converter::{
    AsyncTransformFn, ConversionError, ConversionResult, ConverterRef, TransformFn,
};
pub use cursor::{ArgumentCursor, QUOTES, closing_quote};
pub use definition::PrefixCommand;
pub use error::ArgumentError;
pub use option::{OptionModifier, OptionSpec};
