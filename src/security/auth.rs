//! Auth gate: HTTP Basic authentication middleware.
//!
//! # Responsibilities
//! - Skip paths the route table marks PermitAll
//! - Decode `Authorization: Basic <base64(user:secret)>`
//! - Verify against the user store, attach a Principal on success
//! - Short-circuit with 401 + `WWW-Authenticate` challenge on failure
//!
//! # Design Decisions
//! - Stateless per request: no session is read or written here
//! - Malformed headers are answered like missing credentials; the
//!   client learns nothing about which part was wrong

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::Engine;

use crate::http::server::AppState;
use crate::routing::Policy;
use crate::security::error::GateError;
use crate::security::users::Credentials;

/// Why the Authorization header did not yield credentials.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthHeaderError {
    Missing,
    Malformed,
}

/// Decode Basic credentials from the request headers.
pub fn extract_credentials(headers: &HeaderMap) -> Result<Credentials, AuthHeaderError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthHeaderError::Missing)?
        .to_str()
        .map_err(|_| AuthHeaderError::Malformed)?;

    let (scheme, encoded) = value.split_once(' ').ok_or(AuthHeaderError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthHeaderError::Malformed);
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthHeaderError::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthHeaderError::Malformed)?;

    // The Basic scheme splits on the first colon only.
    let (username, secret) = decoded.split_once(':').ok_or(AuthHeaderError::Malformed)?;

    Ok(Credentials {
        username: username.to_string(),
        secret: secret.to_string(),
    })
}

/// Middleware enforcing the route policy.
pub async fn auth_gate(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if state.routes.decide(path) == Policy::PermitAll {
        return next.run(request).await;
    }

    let realm = state.config.security.realm.clone();
    let credentials = match extract_credentials(request.headers()) {
        Ok(c) => c,
        Err(AuthHeaderError::Missing) => {
            tracing::debug!(path = %path, "Missing credentials");
            return GateError::Unauthenticated { realm }.into_response();
        }
        Err(AuthHeaderError::Malformed) => {
            tracing::debug!(path = %path, "Malformed authorization header");
            return GateError::MalformedAuthorization { realm }.into_response();
        }
    };

    match state.users.verify(&credentials) {
        Some(principal) => {
            tracing::debug!(user = %principal.username, path = %path, "Authenticated");
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        None => {
            tracing::warn!(user = %credentials.username, path = %path, "Credential check failed");
            GateError::Unauthenticated { realm }.into_response()
        }
    }
}
