//! Request handlers behind the gate pipeline.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::http::cookies;
use crate::http::server::AppState;
use crate::security::error::GateError;
use crate::security::users::Principal;
use crate::session::SessionId;

/// Body of `GET /resource`.
#[derive(Debug, Serialize)]
pub struct ResourcePayload {
    pub id: String,
    pub content: &'static str,
}

/// Echo the authenticated principal.
///
/// Reachable only through the auth gate, which guarantees the extension
/// is present.
pub async fn user(Extension(principal): Extension<Principal>) -> Json<Principal> {
    Json(principal)
}

/// Fixed payload with a fresh identifier per call.
pub async fn resource() -> Json<ResourcePayload> {
    Json(ResourcePayload {
        id: Uuid::new_v4().to_string(),
        content: "Hello World",
    })
}

/// Destroy the caller's session.
///
/// Mutating, so the CSRF gate has already validated the token and
/// attached the session id. The CSRF token dies with the session.
pub async fn logout(
    State(state): State<AppState>,
    Extension(SessionId(sid)): Extension<SessionId>,
) -> Response {
    match state.sessions.remove(&sid) {
        Some(session) => {
            tracing::info!(session = %sid, age_secs = session.age_secs(), "Logout")
        }
        None => tracing::info!(session = %sid, removed = false, "Logout"),
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        cookies::clear_session_cookie(&state.config.session.cookie_name),
    );
    response
        .headers_mut()
        .append(header::SET_COOKIE, cookies::clear_xsrf_cookie());
    response
}

/// Fallback for paths with no handler.
pub async fn not_found() -> Response {
    GateError::NotFound.into_response()
}
