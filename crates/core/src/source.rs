//! Source directory enumeration and object key derivation

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A regular file found under the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path on the local filesystem
    pub path: PathBuf,
    /// Path relative to the source directory, `/`-separated
    pub relative: String,
}

impl SourceFile {
    /// Destination key under the given prefix
    pub fn key(&self, prefix: &str) -> String {
        object_key(prefix, &self.relative)
    }
}

/// Join a key prefix and a relative path
pub fn object_key(prefix: &str, relative: &str) -> String {
    format!("{}{}", prefix, relative)
}

/// Convert a relative filesystem path into `/`-separated key form
pub fn relative_key(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| Error::InvalidPath(relative.to_path_buf()))?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => return Err(Error::InvalidPath(relative.to_path_buf())),
        }
    }

    if parts.is_empty() {
        return Err(Error::InvalidPath(relative.to_path_buf()));
    }

    Ok(parts.join("/"))
}

/// Recursively collect every regular file under `root`
///
/// Symlinks are not followed into directories, but a symlink that resolves
/// to a regular file is included. A missing root yields no files. The result
/// is sorted by relative key.
pub fn collect_files(root: &Path) -> Result<Vec<SourceFile>> {
    if !root.exists() {
        tracing::warn!(path = %root.display(), "source directory does not exist");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        let file_type = entry.file_type();

        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| Error::InvalidPath(entry.path().to_path_buf()))?;

        files.push(SourceFile {
            relative: relative_key(relative)?,
            path: entry.into_path(),
        });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    Ok(files)
}
