use std::sync::Arc;

use axum::extract::{rejection::JsonRejection, Path};
use axum::{http::Uri, response::Json, Extension};
use tracing::{error, info, warn};

use crate::api::rest::auth::BearerToken;
use crate::api::rest::dto::{ProfileDto, SaveProfileReq};
use crate::api::rest::error::{
    invalid_body, map_domain_error, profile_not_found, store_unavailable,
};
use crate::api::rest::problem::ProblemResponse;
use crate::config::UserProfilesConfig;
use crate::contract::model::ProfileLookup;
use crate::domain::service::Service;

/// Get the profile stored for an external identity
pub async fn get_profile(
    Extension(svc): Extension<Arc<Service>>,
    Extension(cfg): Extension<Arc<UserProfilesConfig>>,
    BearerToken(token): BearerToken,
    Path(external_id): Path<String>,
    uri: Uri,
) -> Result<Json<ProfileDto>, ProblemResponse> {
    info!("Getting profile for identity: {}", external_id);

    match svc.fetch_profile(&token, &external_id).await {
        Ok(ProfileLookup::Found(record)) => Ok(Json(ProfileDto::from(record))),
        Ok(ProfileLookup::Absent) => Err(profile_not_found(&external_id, uri.path())),
        Ok(ProfileLookup::Failed(reason)) => {
            warn!("Profile lookup for {} failed: {}", external_id, reason);
            if cfg.conflate_fetch_failures {
                Err(profile_not_found(&external_id, uri.path()))
            } else {
                Err(store_unavailable(uri.path()))
            }
        }
        Err(e) => {
            error!("Failed to get profile {}: {}", external_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Insert or fully replace the caller's profile
pub async fn save_profile(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    BearerToken(token): BearerToken,
    body: Result<Json<SaveProfileReq>, JsonRejection>,
) -> Result<Json<ProfileDto>, ProblemResponse> {
    let Json(req_body) = body.map_err(|rejection| {
        warn!("Rejected profile body: {}", rejection.body_text());
        invalid_body(&rejection, uri.path())
    })?;
    info!("Saving profile for identity: {}", req_body.id);

    match svc.save_profile(&token, req_body.into()).await {
        Ok(record) => Ok(Json(ProfileDto::from(record))),
        Err(e) => {
            error!("Failed to save profile: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
