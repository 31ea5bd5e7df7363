//! Identity Provider Port

use uuid::Uuid;

/// Maps a presented credential to a stable user identity
pub trait IdentityProvider: Send + Sync {
    /// `None` for unknown, malformed or forged credentials
    fn authenticate(&self, token: &str) -> Option<Uuid>;
}
