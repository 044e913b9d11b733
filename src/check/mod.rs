//! Check evaluation for command invocations.
//!
//! A [`domain::Check`] is a named predicate over a
//! [`crate::context::domain::Context`]. Checks combine with `|` into
//! [`domain::ExclusiveCheckGroup`]s, where any passing member is enough.
//! [`services::builtins`] provides the common ownership, location, author,
//! role, permission and attachment checks.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
