//! Static API-key gate for the `/apiv2` routes.
//!
//! This is an illustrative shared-secret check, not a credential system:
//! one process-configured key, compared verbatim against the `X-API-Key`
//! header. The check runs as a route layer so no gated handler body ever
//! executes for an unauthenticated request.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::rest::error::ApiError;
use crate::AppContext;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Returns `true` only when a key is configured and the presented value
/// matches it exactly. No key configured means nothing can match.
pub fn validate_api_key(presented: Option<&str>, expected: Option<&str>) -> bool {
    match (presented, expected) {
        (Some(presented), Some(expected)) => presented == expected,
        _ => false,
    }
}

/// Route layer for the gated generation: reject with 403 before the handler
/// runs unless the request carries the exact configured key.
pub async fn require_api_key(
    State(ctx): State<Arc<AppContext>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !validate_api_key(presented, ctx.config.api_key.as_deref()) {
        warn!(
            path = %req.uri().path(),
            present = presented.is_some(),
            "rejected request with missing or invalid API key"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_accepted() {
        assert!(validate_api_key(Some("secret"), Some("secret")));
    }

    #[test]
    fn wrong_or_missing_key_is_rejected() {
        assert!(!validate_api_key(Some("wrong"), Some("secret")));
        assert!(!validate_api_key(None, Some("secret")));
    }

    #[test]
    fn unconfigured_key_rejects_everything() {
        assert!(!validate_api_key(Some("secret"), None));
        assert!(!validate_api_key(None, None));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!validate_api_key(Some("Secret"), Some("secret")));
    }
}
