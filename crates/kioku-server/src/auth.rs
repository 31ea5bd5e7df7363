//! Bearer Token Authentication
//!
//! Resolves `Authorization: Bearer <token>` into a [`Caller`] extension.
//! Requests are never rejected here: a missing or invalid token just
//! makes the caller anonymous and the use cases decide what that means.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use kioku::IdentityProvider;

/// Identity of the requester, `None` when anonymous
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub Option<Uuid>);

/// Extract the raw bearer token, if any
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn resolve_caller(identity: &dyn IdentityProvider, headers: &HeaderMap) -> Caller {
    let Some(token) = bearer_token(headers) else {
        return Caller(None);
    };

    match identity.authenticate(token) {
        Some(user_id) => Caller(Some(user_id)),
        None => {
            tracing::warn!("Invalid bearer token, continuing as anonymous");
            Caller(None)
        }
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(identity): State<Arc<dyn IdentityProvider>>,
    mut request: Request,
    next: Next,
) -> Response {
    let caller = resolve_caller(identity.as_ref(), request.headers());
    request.extensions_mut().insert(caller);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SignedTokenIdentity;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_valid_token_yields_caller() {
        let identity = SignedTokenIdentity::new("secret");
        let user = Uuid::new_v4();
        let token = identity.issue(user).unwrap();

        let caller = resolve_caller(&identity, &headers(&format!("Bearer {token}")));
        assert_eq!(caller, Caller(Some(user)));
    }

    #[test]
    fn test_missing_or_bad_header_is_anonymous() {
        let identity = SignedTokenIdentity::new("secret");

        assert_eq!(resolve_caller(&identity, &HeaderMap::new()), Caller(None));
        assert_eq!(resolve_caller(&identity, &headers("Basic abc")), Caller(None));
        assert_eq!(resolve_caller(&identity, &headers("Bearer ")), Caller(None));
        assert_eq!(
            resolve_caller(&identity, &headers("Bearer not-a-token")),
            Caller(None)
        );
    }

    #[test]
    fn test_no_secret_means_everyone_is_anonymous() {
        let signer = SignedTokenIdentity::new("secret");
        let token = signer.issue(Uuid::new_v4()).unwrap();

        let caller = resolve_caller(
            &SignedTokenIdentity::anonymous_only(),
            &headers(&format!("Bearer {token}")),
        );
        assert_eq!(caller, Caller(None));
    }
}
