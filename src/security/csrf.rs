//! CSRF gate: anti-forgery token middleware.
//!
//! # Responsibilities
//! - On safe methods (GET/HEAD/OPTIONS/...), establish the session and
//!   mint the token if absent, then surface it via the XSRF-TOKEN cookie
//! - On mutating methods (POST/PUT/PATCH/DELETE), require the
//!   `X-XSRF-TOKEN` header to equal the session's stored token
//! - Reject mismatch or absence with 403
//!
//! # Design Decisions
//! - Dual-submit-cookie pattern: the match is strict equality over the
//!   full token, and the token carries 256 bits of entropy
//! - Token minting is atomic per session (store entry lock), so two
//!   concurrent first-touch requests end up with one token

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::cookies;
use crate::http::server::AppState;
use crate::security::error::GateError;
use crate::session::{SessionId, SessionStore};

/// Request header the client echoes the token back in.
pub const X_XSRF_TOKEN: &str = "x-xsrf-token";

fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Middleware issuing and enforcing CSRF tokens.
pub async fn csrf_gate(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.clone();
    let sid = cookies::parse_cookie(request.headers(), &cookie_name);

    if is_mutating(request.method()) {
        let submitted = request
            .headers()
            .get(X_XSRF_TOKEN)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let stored = sid
            .as_deref()
            .and_then(|sid| state.sessions.touch(sid))
            .and_then(|s| s.csrf_token);

        return match (submitted, stored, sid) {
            (Some(submitted), Some(stored), Some(sid)) if submitted == stored => {
                request.extensions_mut().insert(SessionId(sid));
                next.run(request).await
            }
            _ => {
                tracing::warn!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    "CSRF token missing or mismatched"
                );
                GateError::CsrfMismatch.into_response()
            }
        };
    }

    // Safe method: establish the session and make sure a token exists.
    let (sid, fresh_session) = match sid {
        Some(sid) => (sid, false),
        None => (SessionStore::new_session_id(), true),
    };
    let token = state.sessions.ensure_csrf_token(&sid);
    request.extensions_mut().insert(SessionId(sid.clone()));

    let mut response = next.run(request).await;
    if fresh_session {
        response.headers_mut().append(
            header::SET_COOKIE,
            cookies::session_cookie(&cookie_name, &sid),
        );
    }
    response
        .headers_mut()
        .append(header::SET_COOKIE, cookies::xsrf_cookie(&token));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_methods() {
        assert!(is_mutating(&Method::POST));
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::PATCH));
        assert!(is_mutating(&Method::DELETE));
        assert!(!is_mutating(&Method::GET));
        assert!(!is_mutating(&Method::HEAD));
        assert!(!is_mutating(&Method::OPTIONS));
    }
}
