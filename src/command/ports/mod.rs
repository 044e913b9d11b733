//! Ports consumed by the command services.

pub mod converter;
pub mod registry;

pub use converter::{Converter, ConverterFactory};
pub use registry::{CommandRegistry, CommandRegistryError, CommandRegistryResult};
