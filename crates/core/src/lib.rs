//! r2-artifacts-core - Core library for publishing build artifacts to R2
//!
//! This library provides the upload configuration, source directory
//! enumeration, the R2 client, and the upload run itself.

pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod store;
pub mod uploader;

// Re-export commonly used types
pub use client::R2Client;
pub use config::{RawConfig, UploadConfig};
pub use error::{Error, Result};
pub use source::{collect_files, object_key, SourceFile};
pub use store::ObjectStore;
pub use uploader::{run, UploadReport, VERIFY_MAX_KEYS};
