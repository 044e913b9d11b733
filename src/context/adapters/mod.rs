//! Adapter implementations for the context ports.

pub mod memory;
