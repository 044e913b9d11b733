//! Lazily populated owner-ID cache.

use std::collections::HashSet;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::context::domain::UserId;
use crate::context::ports::{OwnerDirectory, OwnerDirectoryError, OwnerDirectoryResult};

/// Write-once set of application owner IDs.
///
/// The first caller fetches through an [`OwnerDirectory`]; concurrent first
/// callers wait on the same initialisation, and every later call is served
/// from memory. A failed fetch leaves the cache unpopulated.
#[derive(Debug, Default)]
pub struct OwnerIdCache {
    owner_ids: OnceCell<HashSet<UserId>>,
}

impl OwnerIdCache {
    /// Creates an unpopulated cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache that is already populated with `owner_ids`.
    #[must_use]
    pub fn populated(owner_ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            owner_ids: OnceCell::new_with(Some(owner_ids.into_iter().collect())),
        }
    }

    /// Returns whether the owner IDs have been resolved.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.owner_ids.initialized()
    }

    /// Returns the cached owner IDs without fetching.
    #[must_use]
    pub fn get(&self) -> Option<&HashSet<UserId>> {
        self.owner_ids.get()
    }

    /// Returns the owner IDs, fetching them from `directory` on first use.
    ///
    /// # Errors
    ///
    /// Propagates the directory's error when the first fetch fails.
    pub async fn get_or_fetch(
        &self,
        directory: &dyn OwnerDirectory,
    ) -> OwnerDirectoryResult<&HashSet<UserId>> {
        self.owner_ids
            .get_or_try_init(|| async {
                let owner_ids = directory.fetch_owner_ids().await?;
                debug!(count = owner_ids.len(), "fetched application owner ids");
                Ok::<_, OwnerDirectoryError>(owner_ids.into_iter().collect::<HashSet<_>>())
            })
            .await
    }
}
