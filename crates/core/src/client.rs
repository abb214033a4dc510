//! R2 Client implementation using AWS S3 SDK

use crate::config::UploadConfig;
use crate::error::Result;
use crate::store::ObjectStore;
use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
    Client,
};
use std::path::Path;

/// R2 client bound to a single bucket
pub struct R2Client {
    client: Client,
    bucket: String,
}

impl R2Client {
    /// Create a new R2 client
    pub fn new(
        endpoint: String,
        access_key_id: &str,
        secret_access_key: &str,
        region: String,
        bucket: String,
    ) -> Self {
        let credentials =
            Credentials::new(access_key_id, secret_access_key, None, None, "r2-artifacts");

        // Build AWS config for R2 (S3-compatible)
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(endpoint)
            .region(Region::new(region))
            .credentials_provider(credentials)
            .build();

        Self {
            client: Client::from_conf(config),
            bucket,
        }
    }

    /// Create a client for the account and bucket of an upload run
    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(
            config.endpoint(),
            &config.access_key_id,
            &config.secret_access_key,
            config.region.clone(),
            config.bucket.clone(),
        )
    }

    /// Upload a file to R2
    pub async fn upload_file(&self, key: &str, file_path: &Path, content_type: &str) -> Result<()> {
        let body = ByteStream::from_path(file_path).await?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await?;

        Ok(())
    }

    /// List up to `max_keys` object keys under `prefix`
    pub async fn list_keys(&self, prefix: &str, max_keys: i32) -> Result<Vec<String>> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .max_keys(max_keys)
            .send()
            .await?;

        let keys = response
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(str::to_string))
            .collect();

        Ok(keys)
    }

    /// Get the bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for R2Client {
    async fn put(&self, key: &str, local_path: &Path) -> Result<()> {
        let content_type = content_type_for(local_path);
        tracing::debug!(key, content_type = %content_type, "put_object");
        self.upload_file(key, local_path, &content_type).await
    }

    async fn list(&self, prefix: &str, max_keys: i32) -> Result<Vec<String>> {
        tracing::debug!(prefix, max_keys, "list_objects_v2");
        self.list_keys(prefix, max_keys).await
    }
}

/// Guess the Content-Type of a file from its extension
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("assets/app.css")), "text/css");
        assert_eq!(
            content_type_for(Path::new("blob.unknownext")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_from_config_binds_bucket() {
        let config = crate::config::RawConfig {
            account_id: Some("acc".to_string()),
            access_key_id: Some("key".to_string()),
            secret_access_key: Some("secret".to_string()),
            bucket: Some("site-builds".to_string()),
            project_id: Some("myapp".to_string()),
            artifacts_root: None,
        }
        .validate()
        .unwrap();

        let client = R2Client::from_config(&config);
        assert_eq!(client.bucket(), "site-builds");
    }
}
