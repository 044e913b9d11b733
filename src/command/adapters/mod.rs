//! Adapters for the command ports.

pub mod converters;
pub mod memory;
