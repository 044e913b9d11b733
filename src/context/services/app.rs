//! Application handle shared by every invocation.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::OwnerIdCache;
use crate::context::domain::UserId;
use crate::context::ports::{
    EntityCache, OwnerDirectory, OwnerDirectoryResult, PermissionCalculator,
};

/// Process-wide state consulted by checks and converters.
///
/// Holds the host client's collaborator ports and the owner-ID cache.
pub struct App {
    cache: Arc<dyn EntityCache>,
    permissions: Arc<dyn PermissionCalculator>,
    owners: Arc<dyn OwnerDirectory>,
    owner_ids: OwnerIdCache,
}

impl App {
    /// Creates an application handle with an unpopulated owner cache.
    #[must_use]
    pub fn new(
        cache: Arc<dyn EntityCache>,
        permissions: Arc<dyn PermissionCalculator>,
        owners: Arc<dyn OwnerDirectory>,
    ) -> Self {
        Self {
            cache,
            permissions,
            owners,
            owner_ids: OwnerIdCache::new(),
        }
    }

    /// Pre-seeds the owner IDs, so the owner directory is never queried.
    #[must_use]
    pub fn with_owner_ids(mut self, owner_ids: impl IntoIterator<Item = UserId>) -> Self {
        self.owner_ids = OwnerIdCache::populated(owner_ids);
        self
    }

    /// Returns the entity cache port.
    #[must_use]
    pub fn cache(&self) -> &dyn EntityCache {
        &*self.cache
    }

    /// Returns the permission calculator port.
    #[must_use]
    pub fn permissions(&self) -> &dyn PermissionCalculator {
        &*self.permissions
    }

    /// Returns the owner-ID cache.
    #[must_use]
    pub const fn owner_id_cache(&self) -> &OwnerIdCache {
        &self.owner_ids
    }

    /// Returns the application owner IDs, fetching them on first use.
    ///
    /// # Errors
    ///
    /// Returns the owner directory's error when the first fetch fails.
    pub async fn owner_ids(&self) -> OwnerDirectoryResult<&HashSet<UserId>> {
        self.owner_ids.get_or_fetch(&*self.owners).await
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("owner_ids", &self.owner_ids)
            .finish_non_exhaustive()
    }
}
