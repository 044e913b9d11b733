//! Converter references attached to options.

use futures::future::BoxFuture;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

use crate::command::ports::ConverterFactory;

/// Error raised by a converter that cannot handle its input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The input is not a valid value of the expected type.
    #[error("'{value}' is not a valid {expected}")]
    Invalid {
        /// Raw argument text.
        value: String,
        /// Name of the expected type.
        expected: String,
    },

    /// Converter-specific failure.
    #[error("{0}")]
    Custom(String),
}

impl ConversionError {
    /// Creates an [`ConversionError::Invalid`] error.
    #[must_use]
    pub fn invalid(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Invalid {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Creates a [`ConversionError::Custom`] error.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Result of a conversion.
pub type ConversionResult = Result<Value, ConversionError>;

/// Synchronous value transform.
pub type TransformFn = dyn Fn(&str) -> ConversionResult + Send + Sync;

/// Asynchronous value transform.
pub type AsyncTransformFn = dyn Fn(String) -> BoxFuture<'static, ConversionResult> + Send + Sync;

/// How an option's raw text is converted.
///
/// The variant is chosen when the option is defined, so the parser never has
/// to inspect the converter at runtime.
#[derive(Clone)]
pub enum ConverterRef {
    /// Plain synchronous transform.
    Transform(Arc<TransformFn>),
    /// Plain transform completing asynchronously.
    AsyncTransform(Arc<AsyncTransformFn>),
    /// Converter object constructed with the invocation context.
    Converter(Arc<dyn ConverterFactory>),
}

impl ConverterRef {
    /// Wraps a synchronous transform.
    #[must_use]
    pub fn transform<F>(transform: F) -> Self
    where
        F: Fn(&str) -> ConversionResult + Send + Sync + 'static,
    {
        Self::Transform(Arc::new(transform))
    }

    /// Wraps an asynchronous transform.
    #[must_use]
    pub fn async_transform<F, Fut>(transform: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ConversionResult> + Send + 'static,
    {
        Self::AsyncTransform(Arc::new(move |raw| Box::pin(transform(raw))))
    }

    /// Wraps a context-bound converter factory.
    #[must_use]
    pub fn converter(factory: impl ConverterFactory + 'static) -> Self {
        Self::Converter(Arc::new(factory))
    }

    /// Short description used in logs.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Transform(_) => "transform",
            Self::AsyncTransform(_) => "async transform",
            Self::Converter(factory) => factory.type_name(),
        }
    }
}

impl fmt::Debug for ConverterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(_) => f.write_str("ConverterRef::Transform"),
            Self::AsyncTransform(_) => f.write_str("ConverterRef::AsyncTransform"),
            Self::Converter(factory) => write!(f, "ConverterRef::Converter({})", factory.type_name()),
        }
    }
}
