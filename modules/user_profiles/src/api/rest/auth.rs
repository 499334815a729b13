use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};

use crate::api::rest::error::unauthorized;
use crate::api::rest::problem::ProblemResponse;
use crate::contract::model::IdentityToken;

/// Session token taken from `Authorization: Bearer <token>`.
///
/// The token is not verified here; it is passed on to the store.
#[derive(Debug, Clone)]
pub struct BearerToken(pub IdentityToken);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim_start().split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, t)| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| Self(IdentityToken::new(t)))
            .ok_or_else(|| unauthorized(parts.uri.path()))
    }
}
