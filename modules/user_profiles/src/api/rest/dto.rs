use serde::{Deserialize, Serialize};

use crate::contract::model::{ProfileDraft, ProfileRecord};

/// REST DTO for a stored profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub skills: String,
    pub availability: bool,
    pub total_jobs_completed: u32,
    pub rating: Option<f64>,
}

/// REST DTO for saving a profile (full replace).
///
/// `id` is the external identity. Keys outside this shape are ignored and
/// never reach storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileReq {
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

impl From<ProfileRecord> for ProfileDto {
    fn from(record: ProfileRecord) -> Self {
        Self {
            id: record.id.get(),
            first_name: record.first_name,
            last_name: record.last_name,
            bio: record.bio,
            avatar_url: record.avatar_url,
            skills: record.skills,
            availability: record.availability,
            total_jobs_completed: record.total_jobs_completed,
            rating: record.rating,
        }
    }
}

impl From<SaveProfileReq> for ProfileDraft {
    fn from(req: SaveProfileReq) -> Self {
        Self {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            bio: req.bio,
            avatar_url: req.avatar_url,
            skills: req.skills,
            availability: req.availability,
            total_jobs_completed: req.total_jobs_completed,
            rating: req.rating,
        }
    }
}
