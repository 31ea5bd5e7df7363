//! Signed URL Blob Store
//!
//! Talks to an object store that accepts HMAC-signed, expiring URLs.
//! Keys are fresh UUIDs. Existence is checked with a HEAD request on
//! every resolve, so returned URLs are always freshly signed.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use uuid::Uuid;

use kioku::{BlobStore, DomainError, UploadTarget};

use super::signing;

/// Connection settings for the object store
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    pub signing_secret: String,
    pub upload_ttl_secs: i64,
    pub download_ttl_secs: i64,
}

impl BlobConfig {
    pub fn new(base_url: impl Into<String>, signing_secret: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            signing_secret: signing_secret.into(),
            upload_ttl_secs: 900,
            download_ttl_secs: 3600,
        }
    }

    pub fn with_upload_ttl(mut self, secs: i64) -> Self {
        self.upload_ttl_secs = secs;
        self
    }

    pub fn with_download_ttl(mut self, secs: i64) -> Self {
        self.download_ttl_secs = secs;
        self
    }
}

/// reqwest-backed implementation of BlobStore
pub struct SignedUrlBlobStore {
    client: Client,
    config: Option<BlobConfig>,
}

impl SignedUrlBlobStore {
    pub fn new(config: BlobConfig) -> Self {
        Self {
            client: Self::build_client(),
            config: Some(config),
        }
    }

    /// Store with no backend: uploads fail, every key resolves to absent
    pub fn disabled() -> Self {
        Self {
            client: Self::build_client(),
            config: None,
        }
    }

    fn build_client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("Kioku-Blob/1.0")
            .build()
            .expect("Failed to build HTTP client")
    }

    /// `{base}/{path}?expires=..&signature=..` signed over `"{verb}:{path}:{expires}"`
    fn signed_url(config: &BlobConfig, verb: &str, path: &str, expires: i64) -> String {
        let message = format!("{verb}:{path}:{expires}");
        let signature = signing::sign(&config.signing_secret, message.as_bytes());
        format!(
            "{}/{}?expires={}&signature={}",
            config.base_url, path, expires, signature
        )
    }
}

#[async_trait]
impl BlobStore for SignedUrlBlobStore {
    async fn create_upload_target(&self) -> Result<UploadTarget, DomainError> {
        let config = self.config.as_ref().ok_or_else(|| {
            DomainError::ExternalService("Blob storage not configured".to_string())
        })?;

        let key = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + ChronoDuration::seconds(config.upload_ttl_secs);
        let url = Self::signed_url(
            config,
            "PUT",
            &format!("upload/{key}"),
            expires_at.timestamp(),
        );

        tracing::debug!("Issued upload target for blob {}", key);

        Ok(UploadTarget {
            url,
            key,
            expires_at,
        })
    }

    async fn resolve(&self, key: &str) -> Result<Option<String>, DomainError> {
        let Some(config) = self.config.as_ref() else {
            return Ok(None);
        };

        let path = format!("objects/{key}");
        let expires = (Utc::now() + ChronoDuration::seconds(config.download_ttl_secs)).timestamp();
        let head_url = Self::signed_url(config, "HEAD", &path, expires);

        let response = self
            .client
            .head(&head_url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Blob lookup failed: {e}")))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                Ok(Some(Self::signed_url(config, "GET", &path, expires)))
            }
            status => Err(DomainError::ExternalService(format!(
                "Blob lookup for {key} returned {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BlobConfig {
        BlobConfig::new("https://blobs.example.com/", "blob-secret")
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        assert_eq!(config().base_url, "https://blobs.example.com");
    }

    #[test]
    fn test_signed_url_shape() {
        let url = SignedUrlBlobStore::signed_url(&config(), "GET", "objects/abc", 1_700_000_000);
        let expected_sig = signing::sign("blob-secret", b"GET:objects/abc:1700000000");

        assert_eq!(
            url,
            format!(
                "https://blobs.example.com/objects/abc?expires=1700000000&signature={}",
                expected_sig
            )
        );
    }

    #[tokio::test]
    async fn test_upload_target() {
        let store = SignedUrlBlobStore::new(config().with_upload_ttl(60));
        let before = Utc::now();
        let target = store.create_upload_target().await.unwrap();

        assert!(Uuid::parse_str(&target.key).is_ok());
        assert!(target
            .url
            .starts_with(&format!("https://blobs.example.com/upload/{}?expires=", target.key)));
        assert!(target.expires_at > before);
        assert!(target.expires_at <= Utc::now() + ChronoDuration::seconds(60));
    }

    #[tokio::test]
    async fn test_disabled_store() {
        let store = SignedUrlBlobStore::disabled();
        assert!(matches!(
            store.create_upload_target().await,
            Err(DomainError::ExternalService(_))
        ));
        assert_eq!(store.resolve("anything").await.unwrap(), None);
    }
}
