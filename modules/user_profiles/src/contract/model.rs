use std::fmt;

/// Storage primary key derived from an external identity string.
///
/// Produced only by [`crate::domain::identity::normalize`]; at most 10 decimal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileKey(u64);

impl ProfileKey {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque session token issued by the identity provider.
///
/// Passed through to the storage backend untouched. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityToken(<redacted>)")
    }
}

/// Session user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthUser {
    /// External identity, e.g. `user_2f9...`.
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

/// Pure profile model for inter-module communication (no serde)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileRecord {
    pub id: ProfileKey,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub avatar_url: String,
    /// Comma-delimited list, kept as raw text.
    pub skills: String,
    pub availability: bool,
    pub total_jobs_completed: u32,
    /// `None` means the profile has no rating yet.
    pub rating: Option<f64>,
}

/// Write input for a save.
///
/// `id` is the external identity string, not yet normalized. Every other field
/// is optional; a missing field is written as its default, never merged with
/// the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileDraft {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub skills: Option<String>,
    pub availability: Option<bool>,
    pub total_jobs_completed: Option<u32>,
    pub rating: Option<f64>,
}

impl ProfileDraft {
    /// Empty draft for an external identity.
    pub fn for_identity(external_id: impl Into<String>) -> Self {
        Self {
            id: external_id.into(),
            ..Default::default()
        }
    }

    /// Draft carrying every stored field of `record`.
    pub fn from_record(external_id: impl Into<String>, record: ProfileRecord) -> Self {
        Self {
            id: external_id.into(),
            first_name: Some(record.first_name),
            last_name: Some(record.last_name),
            bio: Some(record.bio),
            avatar_url: Some(record.avatar_url),
            skills: Some(record.skills),
            availability: Some(record.availability),
            total_jobs_completed: Some(record.total_jobs_completed),
            rating: record.rating,
        }
    }

    /// Full-replace record for `key`; omitted fields take their defaults.
    pub fn into_record(self, key: ProfileKey) -> ProfileRecord {
        ProfileRecord {
            id: key,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
            avatar_url: self.avatar_url.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            availability: self.availability.unwrap_or(false),
            total_jobs_completed: self.total_jobs_completed.unwrap_or(0),
            rating: self.rating,
        }
    }
}

/// Outcome of a profile fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(ProfileRecord),
    /// No profile has been written for this identity yet.
    Absent,
    /// The store could not answer; carries the backend diagnostic.
    Failed(String),
}

impl ProfileLookup {
    /// Collapse `Absent` and `Failed` into `None`.
    pub fn into_option(self) -> Option<ProfileRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::Absent | Self::Failed(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Avatar to display: the stored URL, else the identity provider's image.
pub fn display_avatar<'a>(record: &'a ProfileRecord, user: &'a AuthUser) -> Option<&'a str> {
    if !record.avatar_url.is_empty() {
        return Some(record.avatar_url.as_str());
    }
    user.image_url.as_deref().filter(|url| !url.is_empty())
}
