//! SeaORM-backed store implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be built on a
//! `DatabaseConnection` or on a transaction.

use anyhow::Context;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait};
use tracing::instrument;

use crate::contract::model::{IdentityToken, ProfileKey, ProfileRecord};
use crate::domain::repo::ProfileStore;
use crate::infra::storage::entity::{Column, Entity as ProfileEntity};
use crate::infra::storage::mapper::{contract_to_active, entity_to_contract, key_to_column};

/// Columns rewritten when the id already exists. Everything but the key.
const REPLACED_COLUMNS: [Column; 8] = [
    Column::FirstName,
    Column::LastName,
    Column::Bio,
    Column::AvatarUrl,
    Column::Skills,
    Column::Availability,
    Column::TotalJobsCompleted,
    Column::Rating,
];

/// SeaORM store impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
/// The session token is not used for authorization here; the database
/// connection carries its own credentials.
pub struct SeaOrmProfileStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmProfileStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    async fn find(&self, key: ProfileKey) -> anyhow::Result<Option<ProfileRecord>> {
        let found = ProfileEntity::find_by_id(key_to_column(key))
            .one(&self.conn)
            .await
            .context("select by id failed")?;
        found.map(entity_to_contract).transpose()
    }
}

#[async_trait::async_trait]
impl<C> ProfileStore for SeaOrmProfileStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    #[instrument(
        name = "user_profiles.sea_orm.select_one_by_key",
        skip(self, token, key),
        fields(key = %key, has_token = !token.as_str().is_empty())
    )]
    async fn select_one_by_key(
        &self,
        token: &IdentityToken,
        key: ProfileKey,
    ) -> anyhow::Result<Option<ProfileRecord>> {
        self.find(key).await
    }

    #[instrument(
        name = "user_profiles.sea_orm.upsert",
        skip(self, token, record),
        fields(key = %record.id, has_token = !token.as_str().is_empty())
    )]
    async fn upsert(
        &self,
        token: &IdentityToken,
        record: ProfileRecord,
    ) -> anyhow::Result<ProfileRecord> {
        let key = record.id;
        ProfileEntity::insert(contract_to_active(record))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(REPLACED_COLUMNS)
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("upsert failed")?;

        self.find(key)
            .await?
            .with_context(|| format!("profile {key} missing after upsert"))
    }
}
