use async_trait::async_trait;

use crate::contract::{
    error::UserProfilesError,
    model::{AuthUser, IdentityToken, ProfileDraft, ProfileLookup, ProfileRecord},
};

/// Public API trait for the user_profiles module that other modules can use
#[async_trait]
pub trait UserProfilesApi: Send + Sync {
    /// Look up the profile stored for an external identity.
    ///
    /// Store failures come back as [`ProfileLookup::Failed`], not as an error.
    async fn fetch_profile(
        &self,
        token: &IdentityToken,
        external_id: &str,
    ) -> Result<ProfileLookup, UserProfilesError>;

    /// Insert or fully replace the profile for `draft.id`.
    async fn save_profile(
        &self,
        token: &IdentityToken,
        draft: ProfileDraft,
    ) -> Result<ProfileRecord, UserProfilesError>;

    /// Stored profile as an editable draft, or defaults seeded from the session user.
    async fn load_or_seed(
        &self,
        token: &IdentityToken,
        user: &AuthUser,
    ) -> Result<ProfileDraft, UserProfilesError>;
}
