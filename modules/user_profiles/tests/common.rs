#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use user_profiles::contract::model::{IdentityToken, ProfileKey, ProfileRecord};
use user_profiles::domain::repo::ProfileStore;
use user_profiles::domain::service::Service;
use user_profiles::infra::storage::InMemoryProfileStore;

pub fn token() -> IdentityToken {
    IdentityToken::new("session-token")
}

pub fn memory_service() -> (Service, Arc<InMemoryProfileStore>) {
    let store = Arc::new(InMemoryProfileStore::new());
    (Service::new(store.clone()), store)
}

/// Store whose every call fails, counting attempts.
#[derive(Default)]
pub struct FailingStore {
    pub selects: AtomicUsize,
    pub upserts: AtomicUsize,
}

impl FailingStore {
    pub fn selects(&self) -> usize {
        self.selects.load(Ordering::SeqCst)
    }

    pub fn upserts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for FailingStore {
    async fn select_one_by_key(
        &self,
        _token: &IdentityToken,
        _key: ProfileKey,
    ) -> Result<Option<ProfileRecord>> {
        self.selects.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("connection refused")
    }

    async fn upsert(&self, _token: &IdentityToken, _record: ProfileRecord) -> Result<ProfileRecord> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("connection refused")
    }
}

/// Store that commits a different id than it was given.
pub struct KeyRewritingStore;

#[async_trait]
impl ProfileStore for KeyRewritingStore {
    async fn select_one_by_key(
        &self,
        _token: &IdentityToken,
        _key: ProfileKey,
    ) -> Result<Option<ProfileRecord>> {
        Ok(None)
    }

    async fn upsert(&self, _token: &IdentityToken, _record: ProfileRecord) -> Result<ProfileRecord> {
        Ok(ProfileRecord::default())
    }
}
