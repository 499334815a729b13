use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::UserProfilesApi,
    error::UserProfilesError,
    model::{AuthUser, IdentityToken, ProfileDraft, ProfileLookup, ProfileRecord},
};
use crate::domain::service::Service;

/// Local implementation of the UserProfilesApi trait that delegates to the domain service
pub struct UserProfilesLocalClient {
    service: Arc<Service>,
}

impl UserProfilesLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserProfilesApi for UserProfilesLocalClient {
    async fn fetch_profile(
        &self,
        token: &IdentityToken,
        external_id: &str,
    ) -> Result<ProfileLookup, UserProfilesError> {
        self.service
            .fetch_profile(token, external_id)
            .await
            .map_err(Into::into)
    }

    async fn save_profile(
        &self,
        token: &IdentityToken,
        draft: ProfileDraft,
    ) -> Result<ProfileRecord, UserProfilesError> {
        self.service
            .save_profile(token, draft)
            .await
            .map_err(Into::into)
    }

    async fn load_or_seed(
        &self,
        token: &IdentityToken,
        user: &AuthUser,
    ) -> Result<ProfileDraft, UserProfilesError> {
        self.service
            .load_or_seed(token, user)
            .await
            .map_err(Into::into)
    }
}
