//! Error types for r2-artifacts-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for r2-artifacts-core
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for r2-artifacts-core
#[derive(Error, Debug)]
pub enum Error {
    /// One or more required settings are absent or empty
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    /// Directory traversal failed
    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// A local path cannot be turned into an object key
    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    /// R2 operation errors
    #[error("R2 operation failed: {0}")]
    R2Operation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a configuration error (detected before any I/O)
    pub fn is_config(&self) -> bool {
        matches!(self, Error::MissingConfig(_))
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        Error::Walk {
            path,
            message: err.to_string(),
        }
    }
}

// Generic SdkError conversion for all S3 operations
impl<E> From<aws_sdk_s3::error::SdkError<E>> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: aws_sdk_s3::error::SdkError<E>) -> Self {
        use aws_sdk_s3::error::DisplayErrorContext;
        Error::R2Operation(DisplayErrorContext(&err).to_string())
    }
}

// ByteStreamError conversion
impl From<aws_sdk_s3::primitives::ByteStreamError> for Error {
    fn from(err: aws_sdk_s3::primitives::ByteStreamError) -> Self {
        Error::R2Operation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message() {
        let err = Error::MissingConfig(vec!["CF_ACCOUNT_ID", "R2_BUCKET"]);
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: CF_ACCOUNT_ID, R2_BUCKET"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_other_errors_are_not_config() {
        let err = Error::R2Operation("AccessDenied".to_string());
        assert!(!err.is_config());
        assert_eq!(err.to_string(), "R2 operation failed: AccessDenied");
    }
}
