//! Shared application state for invocations.

mod app;
mod owner_cache;

pub use app::App;
pub use owner_cache::OwnerIdCache;
