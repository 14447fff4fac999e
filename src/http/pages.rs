//! Built-in static pages for the permit-all paths.
//!
//! Small enough to embed; a real deployment would put a static-content
//! server in front of the gateway instead.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><title>Gateway</title></head>
<body>
<h1>Gateway Demo</h1>
<p><a href="/home.html">Home</a> | <a href="/login.html">Login</a></p>
</body>
</html>
"#;

const HOME_HTML: &str = r#"<!doctype html>
<html>
<head><title>Home</title></head>
<body>
<h1>Home</h1>
<p>Fetch <code>/resource</code> with credentials to see the greeting.</p>
</body>
</html>
"#;

const LOGIN_HTML: &str = r#"<!doctype html>
<html>
<head><title>Login</title></head>
<body>
<h1>Login</h1>
<form>
<label>User <input name="username" type="text"/></label>
<label>Password <input name="password" type="password"/></label>
<button type="submit">Login</button>
</form>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn home() -> Html<&'static str> {
    Html(HOME_HTML)
}

pub async fn login() -> Html<&'static str> {
    Html(LOGIN_HTML)
}
