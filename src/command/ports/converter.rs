//! Converter ports.
//!
//! A converter turns the raw text of one argument into a typed value. Plain
//! functions are wrapped in [`crate::command::domain::ConverterRef`]
//! directly; converters that need the invocation context implement
//! [`ConverterFactory`].

use async_trait::async_trait;
use serde_json::Value;

use crate::command::domain::ConversionError;
use crate::context::domain::Context;

/// A converter bound to one invocation context.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Converts the raw argument text.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when `raw` cannot be converted.
    async fn convert(&self, raw: &str) -> Result<Value, ConversionError>;
}

/// Creates context-bound [`Converter`]s.
///
/// The argument parser binds a fresh converter for every conversion attempt.
pub trait ConverterFactory: Send + Sync {
    /// Binds a converter to `context`.
    fn bind<'ctx>(&self, context: &'ctx Context) -> Box<dyn Converter + 'ctx>;

    /// Human-readable name of the produced type, used in logs.
    fn type_name(&self) -> &'static str;
}
