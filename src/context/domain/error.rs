//! Error types for context domain parsing.

use thiserror::Error;

/// Error returned when text is not a valid snowflake identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid snowflake")]
pub struct ParseSnowflakeError(pub String);
