//! Command handlers for r2-artifacts CLI

use anyhow::Result;
use r2_artifacts_core::{run, R2Client, RawConfig};

/// Handle the upload run
///
/// Configuration is validated before the client is built, so a missing
/// value never reaches the network.
pub async fn handle_upload(raw: RawConfig) -> Result<()> {
    let config = raw.validate()?;
    tracing::debug!(?config, "configuration loaded");

    let r2_client = R2Client::from_config(&config);

    let mut stdout = std::io::stdout();
    run(&config, &r2_client, &mut stdout).await?;

    Ok(())
}
