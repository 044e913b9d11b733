//! Invocation context shared by the argument parser and the check evaluator.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`] ([`domain::Context`], identifiers, entities,
//!   [`domain::Permissions`], [`domain::OptionBag`])
//! - Port contracts for the host client in [`ports`]
//! - In-memory adapters in [`adapters`]
//! - The shared [`services::App`] handle and owner-ID cache in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod tests;
