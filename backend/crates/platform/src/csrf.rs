//! CSRF Token Infrastructure
//!
//! Double-submit token scheme: a random token is issued once per session
//! (stored in a cookie), and mutating requests must echo it back in a
//! header. Verification is constant-time.

use crate::crypto::{constant_time_eq, random_token};

/// Token length in random source bytes (before base64 encoding)
pub const CSRF_TOKEN_BYTES: usize = 32;

/// Header carrying the echoed token on mutating requests
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Default cookie name holding the issued token
pub const CSRF_COOKIE: &str = "csrf_token";

/// Issue a CSRF token, reusing the session's existing one when present.
///
/// Issuance is once per session: callers pass the token already stored in
/// the session cookie (if any) and get it back unchanged.
pub fn issue_csrf_token(existing: Option<&str>) -> String {
    match existing {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => random_token(CSRF_TOKEN_BYTES),
    }
}

/// Verify a presented token against the session's issued token.
///
/// Constant-time comparison; a missing or empty issued token never verifies.
pub fn verify_csrf_token(issued: &str, presented: &str) -> bool {
    if issued.is_empty() {
        return false;
    }
    constant_time_eq(issued.as_bytes(), presented.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_generates_token() {
        let token = issue_csrf_token(None);
        assert!(!token.is_empty());
        // 32 random bytes, url-safe base64 without padding
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn test_issue_is_stable_within_session() {
        let first = issue_csrf_token(None);
        let second = issue_csrf_token(Some(&first));
        assert_eq!(first, second);
    }

    #[test]
    fn test_issue_replaces_empty_token() {
        let token = issue_csrf_token(Some(""));
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_roundtrip() {
        let token = issue_csrf_token(None);
        assert!(verify_csrf_token(&token, &token));
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let token = issue_csrf_token(None);
        let other = issue_csrf_token(None);
        assert!(!verify_csrf_token(&token, &other));
        assert!(!verify_csrf_token(&token, &token[..token.len() - 1]));
        assert!(!verify_csrf_token("", &token));
    }
}
