//! Application owner lookup port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::context::domain::UserId;

/// Result type for owner lookups.
pub type OwnerDirectoryResult<T> = Result<T, OwnerDirectoryError>;

/// Fetches the identifiers of the application's owners from the platform.
#[async_trait]
pub trait OwnerDirectory: Send + Sync {
    /// Fetches the owner IDs (the application owner or every team member).
    ///
    /// # Errors
    ///
    /// Returns [`OwnerDirectoryError`] when the platform cannot be queried.
    async fn fetch_owner_ids(&self) -> OwnerDirectoryResult<Vec<UserId>>;
}

/// Errors returned by owner directory adapters.
#[derive(Debug, Clone, Error)]
pub enum OwnerDirectoryError {
    /// The platform request failed.
    #[error("owner lookup failed: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl OwnerDirectoryError {
    /// Wraps a transport or platform error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
