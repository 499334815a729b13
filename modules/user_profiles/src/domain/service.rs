use std::sync::Arc;

use crate::contract::model::{
    AuthUser, IdentityToken, ProfileDraft, ProfileLookup, ProfileRecord,
};
use crate::domain::error::DomainError;
use crate::domain::identity;
use crate::domain::repo::ProfileStore;
use tracing::{debug, info, instrument, warn};

/// Domain service implementing the profile synchronization contract.
/// Depends only on the storage port, not on infra types.
#[derive(Clone)]
pub struct Service {
    store: Arc<dyn ProfileStore>,
}

impl Service {
    /// Create a service over an explicitly provided store handle.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Point lookup by external identity.
    ///
    /// Only an unusable identity is an error. A missing row is `Absent` and a
    /// store failure is logged and returned as `Failed`.
    #[instrument(name = "user_profiles.service.fetch_profile", skip(self, token))]
    pub async fn fetch_profile(
        &self,
        token: &IdentityToken,
        external_id: &str,
    ) -> Result<ProfileLookup, DomainError> {
        let key = identity::normalize(external_id)?;
        debug!(%key, "Looking up profile");

        match self.store.select_one_by_key(token, key).await {
            Ok(Some(record)) => {
                debug!("Profile found");
                Ok(ProfileLookup::Found(record))
            }
            Ok(None) => {
                debug!("No profile stored yet");
                Ok(ProfileLookup::Absent)
            }
            Err(e) => {
                warn!(%key, error = %format!("{e:#}"), "Profile lookup failed");
                Ok(ProfileLookup::Failed(format!("{e:#}")))
            }
        }
    }

    /// Upsert with full-replace semantics.
    ///
    /// Fields missing from `draft` are written as defaults. The committed row
    /// read back from the store is returned; nothing is retried.
    #[instrument(
        name = "user_profiles.service.save_profile",
        skip(self, token, draft),
        fields(external_id = %draft.id)
    )]
    pub async fn save_profile(
        &self,
        token: &IdentityToken,
        draft: ProfileDraft,
    ) -> Result<ProfileRecord, DomainError> {
        let key = identity::normalize(&draft.id)?;
        info!(%key, "Saving profile");

        let record = draft.into_record(key);
        let committed = self
            .store
            .upsert(token, record)
            .await
            .map_err(|e| DomainError::persistence(format!("{e:#}")))?;

        if committed.id != key {
            return Err(DomainError::persistence(format!(
                "store committed id {} for key {}",
                committed.id, key
            )));
        }

        info!(%key, "Profile saved");
        Ok(committed)
    }

    /// Editable draft for the session user.
    ///
    /// A stored profile is returned as-is. Without one, names and avatar are
    /// seeded from the identity provider and everything else takes defaults.
    #[instrument(
        name = "user_profiles.service.load_or_seed",
        skip(self, token, user),
        fields(external_id = %user.id)
    )]
    pub async fn load_or_seed(
        &self,
        token: &IdentityToken,
        user: &AuthUser,
    ) -> Result<ProfileDraft, DomainError> {
        match self.fetch_profile(token, &user.id).await? {
            ProfileLookup::Found(record) => Ok(ProfileDraft::from_record(&user.id, record)),
            ProfileLookup::Absent => {
                debug!("Seeding profile draft from identity provider");
                Ok(seed_draft(user))
            }
            ProfileLookup::Failed(message) => Err(DomainError::persistence(message)),
        }
    }
}

fn seed_draft(user: &AuthUser) -> ProfileDraft {
    ProfileDraft {
        first_name: Some(user.first_name.clone().unwrap_or_default()),
        last_name: Some(user.last_name.clone().unwrap_or_default()),
        avatar_url: Some(user.image_url.clone().unwrap_or_default()),
        ..ProfileDraft::for_identity(&user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_uses_identity_provider_fields() {
        let user = AuthUser {
            id: "user_2f9".into(),
            first_name: Some("Jane".into()),
            last_name: None,
            image_url: Some("http://idp/jane.png".into()),
        };
        let draft = seed_draft(&user);
        assert_eq!(draft.id, "user_2f9");
        assert_eq!(draft.first_name.as_deref(), Some("Jane"));
        assert_eq!(draft.last_name.as_deref(), Some(""));
        assert_eq!(draft.avatar_url.as_deref(), Some("http://idp/jane.png"));
        assert_eq!(draft.bio, None);
        assert_eq!(draft.availability, None);
    }
}
