use crate::api::rest::handlers;
use crate::config::UserProfilesConfig;
use crate::domain::service::Service;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Mount the profile routes onto `router`.
///
/// - `GET /profiles/{external_id}`
/// - `PUT /profiles`
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    cfg: &UserProfilesConfig,
) -> Router {
    let profiles = Router::new()
        .route("/profiles", put(handlers::save_profile))
        .route("/profiles/{external_id}", get(handlers::get_profile))
        .layer(Extension(service))
        .layer(Extension(Arc::new(cfg.clone())))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(cfg.request_timeout_secs),
        ));

    router.merge(profiles)
}
