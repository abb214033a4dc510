//! Upload configuration for r2-artifacts

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the Cloudflare account id
pub const ENV_ACCOUNT_ID: &str = "CF_ACCOUNT_ID";

/// Environment variable holding the R2 access key id
pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the R2 secret access key
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Environment variable holding the target bucket
pub const ENV_BUCKET: &str = "R2_BUCKET";

/// Environment variable holding the project id
pub const ENV_PROJECT_ID: &str = "PROJECT_ID";

/// Environment variable overriding the artifacts root directory
pub const ENV_ARTIFACTS_ROOT: &str = "ARTIFACTS_ROOT";

/// Default parent directory of per-project artifacts
pub const DEFAULT_ARTIFACTS_ROOT: &str = "artifacts";

/// Region sent with signed requests. R2 ignores it, but SigV4 needs one.
pub const DEFAULT_REGION: &str = "auto";

/// R2 S3-compatible API domain
const R2_DOMAIN: &str = "r2.cloudflarestorage.com";

/// Raw, unvalidated settings as read from flags or the environment
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub account_id: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket: Option<String>,
    pub project_id: Option<String>,
    pub artifacts_root: Option<PathBuf>,
}

/// Validated configuration for one upload run
#[derive(Clone)]
pub struct UploadConfig {
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub project_id: String,
    pub artifacts_root: PathBuf,
    pub region: String,
}

impl UploadConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        RawConfig {
            account_id: lookup(ENV_ACCOUNT_ID),
            access_key_id: lookup(ENV_ACCESS_KEY_ID),
            secret_access_key: lookup(ENV_SECRET_ACCESS_KEY),
            bucket: lookup(ENV_BUCKET),
            project_id: lookup(ENV_PROJECT_ID),
            artifacts_root: lookup(ENV_ARTIFACTS_ROOT)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
        .validate()
    }

    /// S3-compatible endpoint for the account
    pub fn endpoint(&self) -> String {
        format!("https://{}.{}", self.account_id, R2_DOMAIN)
    }

    /// Local directory whose contents are uploaded
    pub fn source_dir(&self) -> PathBuf {
        self.artifacts_root.join(&self.project_id)
    }

    /// Key prefix every uploaded object is placed under
    pub fn dest_prefix(&self) -> String {
        format!("builds/{}/dist/", self.project_id)
    }
}

impl fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadConfig")
            .field("account_id", &self.account_id)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("project_id", &self.project_id)
            .field("artifacts_root", &self.artifacts_root)
            .field("region", &self.region)
            .finish()
    }
}

impl RawConfig {
    /// Validate configuration
    ///
    /// Every required value must be present and non-empty. All missing
    /// names are reported together.
    pub fn validate(self) -> Result<UploadConfig> {
        let mut missing = Vec::new();

        let mut require = |value: Option<String>, name: &'static str| match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let account_id = require(self.account_id, ENV_ACCOUNT_ID);
        let access_key_id = require(self.access_key_id, ENV_ACCESS_KEY_ID);
        let secret_access_key = require(self.secret_access_key, ENV_SECRET_ACCESS_KEY);
        let bucket = require(self.bucket, ENV_BUCKET);
        let project_id = require(self.project_id, ENV_PROJECT_ID);

        if !missing.is_empty() {
            return Err(Error::MissingConfig(missing));
        }

        Ok(UploadConfig {
            account_id,
            access_key_id,
            secret_access_key,
            bucket,
            project_id,
            artifacts_root: self
                .artifacts_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_ROOT)),
            region: DEFAULT_REGION.to_string(),
        })
    }
}
