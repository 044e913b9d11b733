//! Filament: prefix-command core for chat bots.
//!
//! This crate turns the text of a chat message into a typed command
//! invocation and decides whether the invocation may run.
//!
//! # Architecture
//!
//! Filament follows hexagonal architecture principles:
//!
//! - **Domain**: Pure command, option and check models
//! - **Ports**: Trait interfaces for the host chat client (entity cache,
//!   permission calculation, owner lookup, command storage, converters)
//! - **Adapters**: In-memory implementations of those ports and the
//!   built-in converters
//!
//! # Modules
//!
//! - [`context`]: Invocation context, identifiers, permissions and the
//!   application handle
//! - [`command`]: Argument tokenizing, option conversion and prefix
//!   invocation
//! - [`check`]: Checks, exclusive check groups and the built-in checks

pub mod check;
pub mod command;
pub mod context;
