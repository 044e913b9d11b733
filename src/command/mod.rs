//! Prefix commands and their arguments.
//!
//! Commands declare [`domain::OptionSpec`]s, each converted with a
//! [`domain::ConverterRef`]. [`services::ArgumentParser`] tokenizes the
//! message text with [`domain::ArgumentCursor`] and fills the context's
//! option bag. [`services::PrefixCommandService`] ties prefix matching,
//! command lookup, checks and argument parsing together.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
