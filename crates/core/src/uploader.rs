//! Artifact upload run: walk, upload, verify

use crate::config::UploadConfig;
use crate::error::Result;
use crate::source::collect_files;
use crate::store::ObjectStore;
use std::io::Write;

/// Number of keys fetched when verifying an upload
pub const VERIFY_MAX_KEYS: i32 = 5;

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Keys written, in upload order
    pub uploaded: Vec<String>,
    /// Keys returned by the verification listing
    pub verified: Vec<String>,
}

impl UploadReport {
    pub fn uploaded_count(&self) -> usize {
        self.uploaded.len()
    }
}

/// Upload every file under the project's source directory, then list a few
/// of the resulting keys.
///
/// Progress lines are written to `out`. The first failure aborts the run;
/// objects uploaded before it are left in place.
pub async fn run<S, W>(config: &UploadConfig, store: &S, out: &mut W) -> Result<UploadReport>
where
    S: ObjectStore + ?Sized,
    W: Write + Send,
{
    let source_dir = config.source_dir();
    let dest_prefix = config.dest_prefix();

    writeln!(
        out,
        "Uploading from {} to s3://{}/{}",
        source_dir.display(),
        config.bucket,
        dest_prefix
    )?;

    let files = collect_files(&source_dir)?;
    tracing::info!(count = files.len(), source = %source_dir.display(), "collected files");

    let mut report = UploadReport::default();

    for file in &files {
        let key = file.key(&dest_prefix);

        writeln!(out, "  Uploading {}...", file.relative)?;
        store.put(&key, &file.path).await?;

        report.uploaded.push(key);
    }

    writeln!(out, "Successfully uploaded {} files", report.uploaded_count())?;

    writeln!(out)?;
    writeln!(out, "Verifying upload:")?;
    report.verified = store.list(&dest_prefix, VERIFY_MAX_KEYS).await?;

    for key in &report.verified {
        writeln!(out, "  ✓ {}", key)?;
    }

    tracing::info!(
        uploaded = report.uploaded_count(),
        verified = report.verified.len(),
        bucket = %config.bucket,
        "upload finished"
    );

    Ok(report)
}
