//! In-memory adapters for the context ports.

mod cache;
mod owners;

pub use cache::InMemoryEntityCache;
pub use owners::StaticOwnerDirectory;
