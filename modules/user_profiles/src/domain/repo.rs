use crate::contract::model::{IdentityToken, ProfileKey, ProfileRecord};
use async_trait::async_trait;

/// Port for the domain layer: the two storage primitives the profile contract needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// The session token is handed to every call so backends that authorize per
/// request can use it.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the single record keyed by `key`. `Ok(None)` means no such row.
    async fn select_one_by_key(
        &self,
        token: &IdentityToken,
        key: ProfileKey,
    ) -> anyhow::Result<Option<ProfileRecord>>;

    /// Insert `record`, or replace every column of the existing row with the same id.
    ///
    /// Returns the row as stored after the write.
    async fn upsert(
        &self,
        token: &IdentityToken,
        record: ProfileRecord,
    ) -> anyhow::Result<ProfileRecord>;
}
