//! Static bearer-token authentication.
//!
//! A single shared secret guards the endpoint. The `Authorization` header
//! must be exactly `Bearer <token>`: case-sensitive scheme, one space, and
//! a token equal to the configured secret byte for byte. There is no
//! per-caller identity, expiry, or rotation.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

/// Required prefix of the `Authorization` header value.
const BEARER_PREFIX: &[u8] = b"Bearer ";

/// The configured shared secret.
///
/// `Debug` output is redacted so the secret never reaches the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a configured secret.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Check a request's headers against this secret.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthFailure`] describing why the credential was
    /// rejected.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<(), AuthFailure> {
        let presented = extract_bearer(headers)?;
        if presented == self.0.as_bytes() {
            Ok(())
        } else {
            Err(AuthFailure::TokenMismatch)
        }
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

/// Why a request failed authentication. Only ever logged; callers see a
/// uniform 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No `Authorization` header was sent.
    MissingHeader,
    /// The header does not use the `Bearer ` scheme.
    NotBearer,
    /// The presented token differs from the configured secret.
    TokenMismatch,
}

impl AuthFailure {
    /// Short reason string for structured logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingHeader => "missing authorization header",
            Self::NotBearer => "not a bearer credential",
            Self::TokenMismatch => "token mismatch",
        }
    }
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the raw token bytes from the first `Authorization: Bearer <token>`
/// header. Bytes are compared as-is, so non-ASCII secrets match exactly.
fn extract_bearer(headers: &HeaderMap) -> Result<&[u8], AuthFailure> {
    headers
        .get(AUTHORIZATION)
        .ok_or(AuthFailure::MissingHeader)?
        .as_bytes()
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthFailure::NotBearer)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    fn token() -> ApiToken {
        ApiToken::new("your-secret-api-token")
    }

    #[test]
    fn accepts_exact_bearer_token() {
        let headers = headers_with("Bearer your-secret-api-token");
        assert_eq!(token().authorize(&headers), Ok(()));
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(
            token().authorize(&HeaderMap::new()),
            Err(AuthFailure::MissingHeader)
        );
    }

    #[test]
    fn rejects_wrong_token() {
        let headers = headers_with("Bearer wrong");
        assert_eq!(token().authorize(&headers), Err(AuthFailure::TokenMismatch));
    }

    #[test]
    fn rejects_other_schemes_and_casing() {
        for value in [
            "your-secret-api-token",
            "bearer your-secret-api-token",
            "Basic your-secret-api-token",
            "Bearer",
        ] {
            let headers = headers_with(value);
            assert_eq!(
                token().authorize(&headers),
                Err(AuthFailure::NotBearer),
                "{value}"
            );
        }
    }

    #[test]
    fn token_comparison_is_exact() {
        for value in [
            "Bearer  your-secret-api-token",
            "Bearer your-secret-api-token ",
            "Bearer your-secret-api-toke",
            "Bearer YOUR-SECRET-API-TOKEN",
            "Bearer ",
        ] {
            let headers = headers_with(value);
            assert_eq!(
                token().authorize(&headers),
                Err(AuthFailure::TokenMismatch),
                "{value}"
            );
        }
    }

    #[test]
    fn non_ascii_header_bytes_do_not_match_ascii_secret() {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_bytes(b"Bearer \xfftoken").ok();
        assert!(value.is_some());
        if let Some(value) = value {
            headers.insert(AUTHORIZATION, value);
        }
        assert_eq!(token().authorize(&headers), Err(AuthFailure::TokenMismatch));
    }

    #[test]
    fn non_ascii_secret_matches_identical_utf8_header() {
        let secret = ApiToken::new("s\u{e9}cret");
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_bytes("Bearer s\u{e9}cret".as_bytes()).ok();
        assert!(value.is_some());
        if let Some(value) = value {
            headers.insert(AUTHORIZATION, value);
        }
        assert_eq!(secret.authorize(&headers), Ok(()));

        let mut other = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_bytes("Bearer secret".as_bytes()) {
            other.insert(AUTHORIZATION, value);
        }
        assert_eq!(secret.authorize(&other), Err(AuthFailure::TokenMismatch));
    }

    #[test]
    fn only_first_header_is_considered() {
        let mut headers = HeaderMap::new();
        headers.append(AUTHORIZATION, HeaderValue::from_static("Bearer wrong"));
        headers.append(
            AUTHORIZATION,
            HeaderValue::from_static("Bearer your-secret-api-token"),
        );
        assert_eq!(token().authorize(&headers), Err(AuthFailure::TokenMismatch));
    }

    #[test]
    fn debug_output_is_redacted() {
        let rendered = format!("{:?}", token());
        assert!(!rendered.contains("secret"));
    }
}
