//! HTTP surface: status mapping, bearer handling and field whitelisting.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::FailingStore;
use serde_json::{json, Value};
use tower::ServiceExt;
use user_profiles::api::rest::problem::APPLICATION_PROBLEM_JSON;
use user_profiles::api::rest::routes::register_routes;
use user_profiles::config::UserProfilesConfig;
use user_profiles::domain::repo::ProfileStore;
use user_profiles::domain::service::Service;
use user_profiles::infra::storage::InMemoryProfileStore;

fn app_with(store: Arc<dyn ProfileStore>, cfg: UserProfilesConfig) -> Router {
    register_routes(Router::new(), Arc::new(Service::new(store)), &cfg)
}

fn app() -> Router {
    app_with(
        Arc::new(InMemoryProfileStore::new()),
        UserProfilesConfig::default(),
    )
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, "Bearer jwt-123")
        .body(Body::empty())
        .unwrap()
}

fn put(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri("/profiles")
        .header(header::AUTHORIZATION, "Bearer jwt-123")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn unknown_profile_is_404_problem() {
    let resp = app().oneshot(get("/profiles/user_404")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        APPLICATION_PROBLEM_JSON
    );
    let body = json_body(resp).await;
    assert_eq!(body["code"], "PROFILES_NOT_FOUND");
    assert_eq!(body["instance"], "/profiles/user_404");
}

#[tokio::test]
async fn missing_bearer_is_401() {
    let req = Request::builder()
        .uri("/profiles/user_1")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn identity_without_digits_is_400() {
    let resp = app().oneshot(get("/profiles/anonymous")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["code"], "PROFILES_INVALID_IDENTITY");
}

#[tokio::test]
async fn put_then_get_drops_unknown_fields() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(put(json!({
            "id": "user_2f9",
            "firstName": "Jane",
            "availability": false,
            "isAdmin": true
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let saved = json_body(resp).await;
    assert_eq!(saved["id"], 29);
    assert_eq!(saved["firstName"], "Jane");
    assert!(saved.get("isAdmin").is_none());

    let resp = app.oneshot(get("/profiles/user_2f9")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = json_body(resp).await;
    assert_eq!(fetched, saved);
    assert_eq!(fetched["bio"], "");
    assert!(fetched["rating"].is_null());
}

#[tokio::test]
async fn store_failure_on_get_is_503_unless_conflated() {
    let resp = app_with(Arc::new(FailingStore::default()), UserProfilesConfig::default())
        .oneshot(get("/profiles/user_1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let cfg = UserProfilesConfig {
        conflate_fetch_failures: true,
        ..Default::default()
    };
    let resp = app_with(Arc::new(FailingStore::default()), cfg)
        .oneshot(get("/profiles/user_1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_failure_on_put_is_500_without_backend_detail() {
    let resp = app_with(Arc::new(FailingStore::default()), UserProfilesConfig::default())
        .oneshot(put(json!({ "id": "user_1" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    assert_eq!(body["code"], "PROFILES_PERSISTENCE");
    assert!(!body["detail"].as_str().unwrap().contains("connection refused"));
}

fn put_raw(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri("/profiles")
        .header(header::AUTHORIZATION, "Bearer jwt-123")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn malformed_put_body_is_problem_document() {
    let cases = [
        (r#"{"firstName":"x"}"#, StatusCode::UNPROCESSABLE_ENTITY),
        (
            r#"{"id":"user_1","totalJobsCompleted":-1}"#,
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        ("not json", StatusCode::BAD_REQUEST),
    ];

    for (raw, status) in cases {
        let resp = app().oneshot(put_raw(raw)).await.unwrap();
        assert_eq!(resp.status(), status, "body {raw:?}");
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_PROBLEM_JSON
        );
        let body = json_body(resp).await;
        assert_eq!(body["code"], "PROFILES_INVALID_BODY");
        assert_eq!(body["status"], status.as_u16());
        assert_eq!(body["instance"], "/profiles");
    }
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    for value in ["bearer jwt-123", "BEARER jwt-123"] {
        let req = Request::builder()
            .uri("/profiles/user_404")
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "header {value:?}");
    }

    let req = Request::builder()
        .uri("/profiles/user_404")
        .header(header::AUTHORIZATION, "Basic jwt-123")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
