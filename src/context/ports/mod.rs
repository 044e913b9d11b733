//! Port contracts for the invocation context.
//!
//! Ports describe the host client's capabilities that checks and converters
//! depend on.

pub mod cache;
pub mod owners;

pub use cache::{EntityCache, PermissionCalculator};
pub use owners::{OwnerDirectory, OwnerDirectoryError, OwnerDirectoryResult};
