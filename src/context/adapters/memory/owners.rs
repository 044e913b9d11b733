//! Fixed owner directory.

use async_trait::async_trait;

use crate::context::{
    domain::UserId,
    ports::{OwnerDirectory, OwnerDirectoryResult},
};

/// Owner directory that always answers with a fixed set of IDs.
#[derive(Debug, Clone, Default)]
pub struct StaticOwnerDirectory {
    owner_ids: Vec<UserId>,
}

impl StaticOwnerDirectory {
    /// Creates a directory answering with `owner_ids`.
    #[must_use]
    pub fn new(owner_ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            owner_ids: owner_ids.into_iter().collect(),
        }
    }
}

#[async_trait]
impl OwnerDirectory for StaticOwnerDirectory {
    async fn fetch_owner_ids(&self) -> OwnerDirectoryResult<Vec<UserId>> {
        Ok(self.owner_ids.clone())
    }
}
