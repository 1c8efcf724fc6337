//! Market Middleware
//!
//! Request-level policy: HTTPS enforcement, maintenance mode, and CSRF
//! verification for mutating routes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::cookie::{CookieConfig, extract_cookie, is_secure_request};
use platform::csrf::{CSRF_HEADER, issue_csrf_token, verify_csrf_token};

use crate::application::config::{MAINTENANCE_SETTING_KEY, MarketConfig};
use crate::domain::repository::SettingsRepository;
use crate::error::MarketError;

/// Middleware state
#[derive(Clone)]
pub struct MarketMiddlewareState<R>
where
    R: SettingsRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<MarketConfig>,
}

/// Redirect plain-HTTP requests when the HTTPS policy is on.
///
/// Forwarded-protocol aware, so it works behind a reverse proxy. A
/// request without a Host header cannot be redirected and passes through.
pub async fn enforce_https(
    config: Arc<MarketConfig>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if !config.force_https || is_secure_request(req.headers(), config.listen_port) {
        return Ok(next.run(req).await);
    }

    let Some(host) = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(next.run(req).await);
    };

    // Nested routers strip the mount prefix from `req.uri()`; the
    // original URI is preserved in the request extensions.
    let uri = req
        .extensions()
        .get::<axum::extract::OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| req.uri().clone());

    let location = format!("https://{}{}", host, uri);

    tracing::debug!(location = %location, "Redirecting insecure request");

    match HeaderValue::from_str(&location) {
        Ok(value) => Err((
            StatusCode::PERMANENT_REDIRECT,
            [(header::LOCATION, value)],
        )
            .into_response()),
        Err(_) => Err(StatusCode::BAD_REQUEST.into_response()),
    }
}

/// Reject all requests with 503 while maintenance mode is enabled.
///
/// The toggle lives in `admin_settings` and is read per request, so it
/// takes effect without a restart.
pub async fn check_maintenance<R>(
    state: MarketMiddlewareState<R>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SettingsRepository + Clone + Send + Sync + 'static,
{
    let enabled = match state.repo.get_setting(MAINTENANCE_SETTING_KEY).await {
        Ok(value) => matches!(value.as_deref(), Some("1") | Some("true")),
        Err(e) => {
            tracing::error!(error = %e, "Maintenance mode lookup failed");
            return Err(e.into_response());
        }
    };

    if enabled {
        return Err(MarketError::Maintenance.into_response());
    }

    Ok(next.run(req).await)
}

/// CSRF double-submit verification.
///
/// Mutating requests must echo the cookie token in the `x-csrf-token`
/// header. Safe requests pass through; when no token cookie exists yet,
/// one is issued on the response.
pub async fn verify_csrf(
    config: Arc<MarketConfig>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let cookie_token = extract_cookie(req.headers(), &config.csrf_cookie_name);

    if is_mutating(req.method()) {
        let issued = cookie_token.as_deref().unwrap_or("");
        let presented = req
            .headers()
            .get(CSRF_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");

        if !verify_csrf_token(issued, presented) {
            return Err(MarketError::CsrfRejected.into_response());
        }

        return Ok(next.run(req).await);
    }

    // Safe method: issue a token cookie when the session has none.
    // The cookie is intentionally not HttpOnly; the client must read it
    // to echo it back in the header.
    if cookie_token.is_some() {
        return Ok(next.run(req).await);
    }

    let token = issue_csrf_token(None);
    let cookie = CookieConfig {
        name: config.csrf_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: false,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl.as_secs() as i64),
    };

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&cookie.build_set_cookie(&token)) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}

fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}
