use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::api::rest::problem::{Problem, ProblemResponse};
use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance);

    // Add trace id from current tracing span if available
    let problem = if let Some(id) = tracing::Span::current().id() {
        problem.with_trace_id(id.into_u64().to_string())
    } else {
        problem
    };

    ProblemResponse(problem)
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::InvalidIdentity { identity } => from_parts(
            StatusCode::BAD_REQUEST,
            "PROFILES_INVALID_IDENTITY",
            "Invalid identity",
            format!("Identity '{}' contains no digits", identity),
            instance,
        ),
        DomainError::Persistence { .. } => {
            // Log the backend diagnostic but don't expose it to the client
            tracing::error!(error = ?e, "Profile persistence failed");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROFILES_PERSISTENCE",
                "Internal error",
                "The profile could not be stored",
                instance,
            )
        }
    }
}

pub fn profile_not_found(external_id: &str, instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::NOT_FOUND,
        "PROFILES_NOT_FOUND",
        "Profile not found",
        format!("No profile stored for identity '{}'", external_id),
        instance,
    )
}

pub fn store_unavailable(instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::SERVICE_UNAVAILABLE,
        "PROFILES_STORE_UNAVAILABLE",
        "Profile store unavailable",
        "The profile store could not be reached",
        instance,
    )
}

/// Body that failed to parse or deserialize; keeps axum's 400/415/422 status.
pub fn invalid_body(rejection: &JsonRejection, instance: &str) -> ProblemResponse {
    from_parts(
        rejection.status(),
        "PROFILES_INVALID_BODY",
        "Invalid request body",
        rejection.body_text(),
        instance,
    )
}

pub fn unauthorized(instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::UNAUTHORIZED,
        "PROFILES_UNAUTHORIZED",
        "Unauthorized",
        "A bearer token is required",
        instance,
    )
}
