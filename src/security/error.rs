//! Gate rejection taxonomy.
//!
//! Every failure is terminal for its request: the client re-authenticates
//! or re-fetches a token, the process is never affected.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Reasons the gate pipeline rejects a request.
#[derive(Debug, Error)]
pub enum GateError {
    /// Missing credentials, unknown user, or wrong secret.
    #[error("missing or invalid credentials")]
    Unauthenticated { realm: String },

    /// Authorization header present but unparseable (bad scheme, bad
    /// base64, missing colon). Answered exactly like Unauthenticated.
    #[error("malformed authorization header")]
    MalformedAuthorization { realm: String },

    /// Missing or mismatched CSRF token on a mutating request.
    #[error("missing or mismatched csrf token")]
    CsrfMismatch,

    /// No handler behind a permitted path.
    #[error("no handler for path")]
    NotFound,
}

fn challenge(realm: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm))
        .unwrap_or_else(|_| HeaderValue::from_static("Basic realm=\"gateway\""))
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        match self {
            GateError::Unauthenticated { realm }
            | GateError::MalformedAuthorization { realm } => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, challenge(&realm))],
                "Unauthorized",
            )
                .into_response(),
            GateError::CsrfMismatch => {
                (StatusCode::FORBIDDEN, "Invalid CSRF token").into_response()
            }
            GateError::NotFound => {
                (StatusCode::NOT_FOUND, "No matching route found").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_carries_challenge() {
        let resp = GateError::Unauthenticated {
            realm: "gateway".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"gateway\""
        );
    }

    #[test]
    fn test_csrf_mismatch_is_forbidden() {
        let resp = GateError::CsrfMismatch.into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found() {
        let resp = GateError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
