//! Object store capability used by the uploader

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Minimal object store operations needed to publish and verify artifacts
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload the full contents of `local_path` to `key`, replacing any
    /// existing object
    async fn put(&self, key: &str, local_path: &Path) -> Result<()>;

    /// List at most `max_keys` keys starting with `prefix`
    async fn list(&self, prefix: &str, max_keys: i32) -> Result<Vec<String>>;
}
