use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::fmt;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Shared secret every protected request must present as `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct StaticToken(Arc<str>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Arc::from(token.into()))
    }

    /// Constant-time comparison against the configured secret.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Static bearer-token authentication middleware
///
/// Rejects the request with 401 when the header is missing, malformed, or
/// carries the wrong token.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::{StaticToken, bearer_auth_middleware};
///
/// let token = StaticToken::new("s3cret");
///
/// let protected_routes = Router::new()
///     .route("/api/protected", get(protected_handler))
///     .layer(axum::middleware::from_fn_with_state(token, bearer_auth_middleware));
/// ```
pub async fn bearer_auth_middleware(
    State(token): State<StaticToken>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match extract_bearer_token(request.headers()) {
        None => {
            tracing::debug!(path = %request.uri().path(), "No bearer token in Authorization header");
            return Err(AppError::Unauthorized("Missing bearer token".to_string()));
        }
        Some(candidate) if !token.matches(candidate) => {
            tracing::warn!(path = %request.uri().path(), "Rejected request with invalid bearer token");
            return Err(AppError::Unauthorized("Invalid bearer token".to_string()));
        }
        Some(_) => {}
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{HeaderValue, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                StaticToken::new("s3cret"),
                bearer_auth_middleware,
            ))
    }

    async fn status_with(auth: Option<&str>) -> StatusCode {
        let mut builder = axum::http::Request::get("/");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        assert_eq!(status_with(Some("Bearer s3cret")).await, StatusCode::OK);
        assert_eq!(status_with(Some("bearer s3cret")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_wrong_token_is_unauthorized() {
        for auth in [
            None,
            Some("Bearer wrong"),
            Some("Bearer "),
            Some("Basic s3cret"),
            Some("s3cret"),
            Some("Bearer s3cret-and-more"),
        ] {
            assert_eq!(status_with(auth).await, StatusCode::UNAUTHORIZED, "auth {:?}", auth);
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer  abc "));
        assert_eq!(extract_bearer_token(&headers), Some("abc"));
    }

    #[test]
    fn test_static_token_debug_is_redacted() {
        let token = StaticToken::new("s3cret");
        assert!(!format!("{:?}", token).contains("s3cret"));
        assert!(token.matches("s3cret"));
        assert!(!token.matches("s3cre"));
    }

    #[test]
    fn test_static_token_rejects_any_length_or_byte_mismatch() {
        let token = StaticToken::new("s3cret");
        for candidate in ["", "x", "s3cre", "s3crex", "S3cret", "s3cret ", "s3crets3cret"] {
            assert!(!token.matches(candidate), "candidate {:?}", candidate);
        }
    }
}
