//! Editable profile bound to a session user.
//!
//! Carries the flags a profile page renders (loading, saving, success, error)
//! and the per-save state machine `Idle → Saving → Committed | Failed`.
//! Rendering itself lives elsewhere.

use crate::contract::client::UserProfilesApi;
use crate::contract::error::UserProfilesError;
use crate::contract::model::{
    display_avatar, AuthUser, IdentityToken, ProfileDraft, ProfileRecord,
};
use tracing::{debug, warn};

pub const LOAD_FAILED_MESSAGE: &str = "Couldn't load your profile. Please try again.";

/// State of the most recent save.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Committed(ProfileRecord),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ProfileForm {
    user: AuthUser,
    draft: ProfileDraft,
    loading: bool,
    error: Option<String>,
    state: SaveState,
}

impl ProfileForm {
    /// A form that has not been loaded yet.
    pub fn new(user: AuthUser) -> Self {
        let draft = ProfileDraft::for_identity(&user.id);
        Self {
            user,
            draft,
            loading: true,
            error: None,
            state: SaveState::Idle,
        }
    }

    /// Fill the draft from storage, or from the identity provider when no profile exists.
    pub async fn load(&mut self, api: &dyn UserProfilesApi, token: &IdentityToken) {
        self.loading = true;
        match api.load_or_seed(token, &self.user).await {
            Ok(draft) => {
                self.draft = draft;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Loading profile failed");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Enter `Saving` and hand out the draft to persist.
    ///
    /// The draft id is always the session user's identity.
    pub fn begin_save(&mut self) -> Result<ProfileDraft, UserProfilesError> {
        if self.state == SaveState::Saving {
            return Err(UserProfilesError::SaveInProgress);
        }
        self.state = SaveState::Saving;
        self.error = None;
        self.draft.id = self.user.id.clone();
        Ok(self.draft.clone())
    }

    /// Leave `Saving` with the outcome of the write.
    pub fn finish_save(&mut self, result: Result<ProfileRecord, UserProfilesError>) {
        match result {
            Ok(record) => {
                debug!(key = %record.id, "Profile committed");
                self.draft = ProfileDraft::from_record(&self.user.id, record.clone());
                self.state = SaveState::Committed(record);
            }
            Err(e) => {
                let message = format!("Couldn't save your profile: {e}");
                self.error = Some(message.clone());
                self.state = SaveState::Failed(message);
            }
        }
    }

    /// One save attempt. A failed attempt is not retried.
    pub async fn submit(
        &mut self,
        api: &dyn UserProfilesApi,
        token: &IdentityToken,
    ) -> Result<(), UserProfilesError> {
        let draft = self.begin_save()?;
        let result = api.save_profile(token, draft).await;
        self.finish_save(result);
        Ok(())
    }

    /// Hide the success banner; the committed record stays in the draft.
    pub fn dismiss_success(&mut self) {
        if matches!(self.state, SaveState::Committed(_)) {
            self.state = SaveState::Idle;
        }
    }

    pub fn user(&self) -> &AuthUser {
        &self.user
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn state(&self) -> &SaveState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.state == SaveState::Saving
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.state, SaveState::Committed(_))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Avatar for the current draft, falling back to the identity provider image.
    pub fn avatar(&self) -> Option<String> {
        let record = ProfileRecord {
            avatar_url: self.draft.avatar_url.clone().unwrap_or_default(),
            ..Default::default()
        };
        display_avatar(&record, &self.user).map(str::to_owned)
    }
}
