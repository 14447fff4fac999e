//! CSRF gate integration tests: token issuance, dual-submit validation,
//! logout, and the concurrent first-touch property.

use auth_gateway::GatewayConfig;

mod common;

#[tokio::test]
async fn test_safe_request_issues_session_and_token() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::demo()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let sid = common::response_cookie(&res, "GATEWAY_SESSION")
        .expect("first touch must set the session cookie");
    let token = common::response_cookie(&res, "XSRF-TOKEN")
        .expect("first touch must surface the CSRF token");
    assert!(uuid::Uuid::parse_str(&sid).is_ok());
    assert_eq!(token.len(), 43); // 32 bytes base64url, no padding

    // Same session on the next request keeps the same token.
    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(
        common::response_cookie(&res, "XSRF-TOKEN").unwrap(),
        token,
        "token must be stable within a session"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_mutating_request_without_token_forbidden() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::demo()).await;
    let client = common::client();

    // Authenticated, but no session and no token header.
    let res = client
        .post(format!("http://{}/logout", addr))
        .basic_auth("user", Some("password"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    shutdown.trigger();
}

#[tokio::test]
async fn test_mutating_request_with_wrong_token_forbidden() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::demo()).await;
    let client = common::client();

    // Establish a session first.
    client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    let res = client
        .post(format!("http://{}/logout", addr))
        .basic_auth("user", Some("password"))
        .header("X-XSRF-TOKEN", "not-the-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    shutdown.trigger();
}

#[tokio::test]
async fn test_issued_token_passes_the_gate() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::demo()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    let token = common::response_cookie(&res, "XSRF-TOKEN").unwrap();

    let res = client
        .post(format!("http://{}/logout", addr))
        .basic_auth("user", Some("password"))
        .header("X-XSRF-TOKEN", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);

    shutdown.trigger();
}

#[tokio::test]
async fn test_logout_destroys_session_and_rotates_token() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::demo()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    let old_sid = common::response_cookie(&res, "GATEWAY_SESSION").unwrap();
    let old_token = common::response_cookie(&res, "XSRF-TOKEN").unwrap();

    let res = client
        .post(format!("http://{}/logout", addr))
        .basic_auth("user", Some("password"))
        .header("X-XSRF-TOKEN", &old_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);

    // The old session is gone: resubmitting the old token against the
    // old session id no longer validates.
    let plain = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = plain
        .post(format!("http://{}/logout", addr))
        .basic_auth("user", Some("password"))
        .header("Cookie", format!("GATEWAY_SESSION={}", old_sid))
        .header("X-XSRF-TOKEN", &old_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    // A later safe request mints a fresh session with a fresh token.
    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    let new_token = common::response_cookie(&res, "XSRF-TOKEN").unwrap();
    assert_ne!(new_token, old_token);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_first_touch_mints_single_token() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::demo()).await;

    // No cookie store: both requests present the same brand-new session id.
    let plain = reqwest::Client::builder().no_proxy().build().unwrap();
    let sid = "11111111-2222-3333-4444-555555555555";

    let a = plain
        .get(format!("http://{}/", addr))
        .header("Cookie", format!("GATEWAY_SESSION={}", sid))
        .send();
    let b = plain
        .get(format!("http://{}/", addr))
        .header("Cookie", format!("GATEWAY_SESSION={}", sid))
        .send();
    let (a, b) = futures_util::join!(a, b);
    let (a, b) = (a.unwrap(), b.unwrap());

    let token_a = common::response_cookie(&a, "XSRF-TOKEN").unwrap();
    let token_b = common::response_cookie(&b, "XSRF-TOKEN").unwrap();
    assert_eq!(token_a, token_b, "exactly one token per session");

    shutdown.trigger();
}

#[tokio::test]
async fn test_csrf_applies_to_permit_all_mutations_too() {
    // The CSRF gate sits behind the auth gate but in front of every
    // handler; a mutating request to a permit-all path still needs a
    // token (it gets 403, not 401, since auth is bypassed).
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::demo()).await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    shutdown.trigger();
}
