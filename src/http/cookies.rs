//! Cookie parsing and construction.
//!
//! The session cookie is HttpOnly; the XSRF cookie must stay readable by
//! client script so it can be echoed back in the `X-XSRF-TOKEN` header.
//! No `Secure` attribute: the demo listener speaks plain HTTP.

use axum::http::{HeaderMap, HeaderValue};

/// Cookie surfacing the CSRF token to the client.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Extract a cookie value by name from the Cookie header.
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie = headers.get("cookie")?;
    let s = cookie.to_str().ok()?;
    for part in s.split(';') {
        let p = part.trim();
        if let Some((k, v)) = p.split_once('=') {
            if k == name {
                return Some(v.to_string());
            }
        }
    }
    None
}

/// Session cookie: HttpOnly, scoped to path / with SameSite=Strict.
pub fn session_cookie(name: &str, sid: &str) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/",
        name, sid
    ))
    .unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Expired session cookie, sent on logout.
pub fn clear_session_cookie(name: &str) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Strict; Path=/",
        name
    ))
    .unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// XSRF token cookie, deliberately not HttpOnly.
pub fn xsrf_cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}={}; SameSite=Strict; Path=/",
        XSRF_COOKIE, token
    ))
    .unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Expired XSRF cookie, sent on logout.
pub fn clear_xsrf_cookie() -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite=Strict; Path=/",
        XSRF_COOKIE
    ))
    .unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_static("a=1; GATEWAY_SESSION=abc-def; b=2"),
        );
        assert_eq!(
            parse_cookie(&headers, "GATEWAY_SESSION"),
            Some("abc-def".to_string())
        );
        assert_eq!(parse_cookie(&headers, "a"), Some("1".to_string()));
        assert_eq!(parse_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_parse_cookie_no_header() {
        assert_eq!(parse_cookie(&HeaderMap::new(), "any"), None);
    }

    #[test]
    fn test_session_cookie_is_http_only() {
        let v = session_cookie("GATEWAY_SESSION", "sid");
        assert!(v.to_str().unwrap().contains("HttpOnly"));
    }

    #[test]
    fn test_xsrf_cookie_is_script_readable() {
        let v = xsrf_cookie("tok");
        assert!(!v.to_str().unwrap().contains("HttpOnly"));
        assert!(v.to_str().unwrap().starts_with("XSRF-TOKEN=tok"));
    }
}
