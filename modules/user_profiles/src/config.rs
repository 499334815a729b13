use serde::{Deserialize, Serialize};

/// Configuration for the user_profiles module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserProfilesConfig {
    /// Serve a failed lookup as "no profile yet" instead of 503.
    #[serde(default)]
    pub conflate_fetch_failures: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for UserProfilesConfig {
    fn default() -> Self {
        Self {
            conflate_fetch_failures: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl UserProfilesConfig {
    /// Reject values the router cannot serve with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("user_profiles.request_timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}
