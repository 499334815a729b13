//! Process-local store. Backs the server's mock mode and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::contract::model::{IdentityToken, ProfileKey, ProfileRecord};
use crate::domain::repo::ProfileStore;

#[derive(Default)]
pub struct InMemoryProfileStore {
    rows: RwLock<HashMap<ProfileKey, ProfileRecord>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn select_one_by_key(
        &self,
        _token: &IdentityToken,
        key: ProfileKey,
    ) -> anyhow::Result<Option<ProfileRecord>> {
        Ok(self.rows.read().get(&key).cloned())
    }

    async fn upsert(
        &self,
        _token: &IdentityToken,
        record: ProfileRecord,
    ) -> anyhow::Result<ProfileRecord> {
        // Last write wins.
        self.rows.write().insert(record.id, record.clone());
        Ok(record)
    }
}
