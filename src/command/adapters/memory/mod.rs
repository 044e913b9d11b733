//! In-memory adapters for command storage.

mod registry;

pub use registry::InMemoryCommandRegistry;
