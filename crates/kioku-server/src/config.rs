//! Server Configuration
//!
//! Read once at startup from Shuttle secrets.

use anyhow::{Context, Result};
use shuttle_runtime::SecretStore;

use crate::adapters::BlobConfig;

/// Default number of suggestions returned when the caller gives no limit
pub const DEFAULT_SUGGESTION_LIMIT: i64 = 3;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Secret used to verify bearer tokens (None = anonymous only)
    pub auth_secret: Option<String>,
    /// Blob storage settings (None = media disabled)
    pub blob: Option<BlobConfig>,
    pub suggestion_limit: i64,
}

impl ServerConfig {
    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secret) = lookup("KIOKU_AUTH_SECRET").filter(|s| !s.is_empty()) {
            config = config.with_auth_secret(secret);
        }

        if let (Some(base_url), Some(secret)) =
            (lookup("BLOB_BASE_URL"), lookup("BLOB_SIGNING_SECRET"))
        {
            let mut blob = BlobConfig::new(base_url, secret);
            if let Some(ttl) = parse_number(&lookup, "BLOB_UPLOAD_TTL_SECS")? {
                blob = blob.with_upload_ttl(ttl);
            }
            if let Some(ttl) = parse_number(&lookup, "BLOB_DOWNLOAD_TTL_SECS")? {
                blob = blob.with_download_ttl(ttl);
            }
            config = config.with_blob(blob);
        }

        if let Some(limit) = parse_number(&lookup, "SUGGESTION_LIMIT")? {
            config = config.with_suggestion_limit(limit);
        }

        Ok(config)
    }

    /// Build from the Shuttle secret store
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    pub fn with_auth_secret(mut self, secret: impl Into<String>) -> Self {
        self.auth_secret = Some(secret.into());
        self
    }

    pub fn with_blob(mut self, blob: BlobConfig) -> Self {
        self.blob = Some(blob);
        self
    }

    pub fn with_suggestion_limit(mut self, limit: i64) -> Self {
        self.suggestion_limit = limit;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            auth_secret: None,
            blob: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

fn parse_number<F>(lookup: &F, key: &str) -> Result<Option<i64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be an integer, got '{raw}'"))?;
    if value <= 0 {
        anyhow::bail!("{key} must be positive, got {value}");
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert!(config.auth_secret.is_none());
        assert!(config.blob.is_none());
        assert_eq!(config.suggestion_limit, DEFAULT_SUGGESTION_LIMIT);
    }

    #[test]
    fn test_full_config() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("KIOKU_AUTH_SECRET", "tok"),
            ("BLOB_BASE_URL", "https://blobs.example.com/"),
            ("BLOB_SIGNING_SECRET", "blob"),
            ("BLOB_UPLOAD_TTL_SECS", "60"),
            ("BLOB_DOWNLOAD_TTL_SECS", "120"),
            ("SUGGESTION_LIMIT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.auth_secret.as_deref(), Some("tok"));
        let blob = config.blob.unwrap();
        assert_eq!(blob.base_url, "https://blobs.example.com");
        assert_eq!(blob.upload_ttl_secs, 60);
        assert_eq!(blob.download_ttl_secs, 120);
        assert_eq!(config.suggestion_limit, 5);
    }

    #[test]
    fn test_blob_needs_both_keys() {
        let config = ServerConfig::from_lookup(lookup(&[("BLOB_BASE_URL", "https://blobs")])).unwrap();
        assert!(config.blob.is_none());
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("SUGGESTION_LIMIT", "lots")])).unwrap_err();
        assert!(err.to_string().contains("SUGGESTION_LIMIT"));

        assert!(ServerConfig::from_lookup(lookup(&[("SUGGESTION_LIMIT", "0")])).is_err());
    }
}
