//! Signed bearer token identity
//!
//! Tokens look like `<user uuid>.<hex HMAC-SHA256(user uuid)>`. They are
//! minted by the authentication service that shares the secret.

use uuid::Uuid;

use kioku::IdentityProvider;

use super::signing;

/// HMAC-verified token identity provider
pub struct SignedTokenIdentity {
    secret: Option<String>,
}

impl SignedTokenIdentity {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
        }
    }

    /// Provider that recognizes nobody; every caller is anonymous
    pub fn anonymous_only() -> Self {
        Self { secret: None }
    }

    /// Mint a token for `user_id`.
    ///
    /// Production tokens come from the authentication service that
    /// shares the secret; this is only used to exercise verification.
    #[cfg(test)]
    pub fn issue(&self, user_id: Uuid) -> Option<String> {
        let secret = self.secret.as_deref()?;
        let subject = user_id.to_string();
        Some(format!("{}.{}", subject, signing::sign(secret, subject.as_bytes())))
    }
}

impl IdentityProvider for SignedTokenIdentity {
    fn authenticate(&self, token: &str) -> Option<Uuid> {
        let secret = self.secret.as_deref()?;
        let (subject, signature) = token.split_once('.')?;

        if !signing::verify(secret, subject.as_bytes(), signature) {
            return None;
        }
        subject.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_authenticate() {
        let identity = SignedTokenIdentity::new("s3cret");
        let user = Uuid::new_v4();
        let token = identity.issue(user).unwrap();

        assert_eq!(identity.authenticate(&token), Some(user));
    }

    #[test]
    fn test_forged_token_rejected() {
        let identity = SignedTokenIdentity::new("s3cret");
        let forger = SignedTokenIdentity::new("guess");
        let token = forger.issue(Uuid::new_v4()).unwrap();

        assert_eq!(identity.authenticate(&token), None);
    }

    #[test]
    fn test_swapped_subject_rejected() {
        let identity = SignedTokenIdentity::new("s3cret");
        let token = identity.issue(Uuid::new_v4()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();
        let swapped = format!("{}.{}", Uuid::new_v4(), signature);

        assert_eq!(identity.authenticate(&swapped), None);
    }

    #[test]
    fn test_malformed_tokens() {
        let identity = SignedTokenIdentity::new("s3cret");
        assert_eq!(identity.authenticate(""), None);
        assert_eq!(identity.authenticate("no-dot"), None);
        assert_eq!(identity.authenticate("not-a-uuid.abcd"), None);
    }

    #[test]
    fn test_anonymous_only() {
        let identity = SignedTokenIdentity::anonymous_only();
        assert!(identity.issue(Uuid::new_v4()).is_none());
        assert_eq!(identity.authenticate("anything.at-all"), None);
    }
}
