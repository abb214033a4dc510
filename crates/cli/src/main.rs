use anyhow::Result;
use clap::Parser;
use color_eyre::config::HookBuilder;
use r2_artifacts_core::config::{
    RawConfig, ENV_ACCESS_KEY_ID, ENV_ACCOUNT_ID, ENV_ARTIFACTS_ROOT, ENV_BUCKET, ENV_PROJECT_ID,
    ENV_SECRET_ACCESS_KEY,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod handlers;

/// r2-artifacts - Upload a project's build artifacts to Cloudflare R2
#[derive(Parser, Debug)]
#[command(name = "r2-artifacts")]
#[command(version)]
#[command(
    about = "Upload artifacts/<project> to s3://<bucket>/builds/<project>/dist/ on Cloudflare R2",
    long_about = None
)]
struct Cli {
    /// Cloudflare account ID
    #[arg(long, env = ENV_ACCOUNT_ID)]
    account_id: Option<String>,

    /// R2 access key ID
    #[arg(long, env = ENV_ACCESS_KEY_ID, hide_env_values = true)]
    access_key_id: Option<String>,

    /// R2 secret access key
    #[arg(long, env = ENV_SECRET_ACCESS_KEY, hide_env_values = true)]
    secret_access_key: Option<String>,

    /// Target bucket
    #[arg(long, env = ENV_BUCKET)]
    bucket: Option<String>,

    /// Project ID (source is <artifacts-root>/<project-id>)
    #[arg(long, env = ENV_PROJECT_ID)]
    project_id: Option<String>,

    /// Parent directory of per-project artifacts (default: artifacts)
    #[arg(long, env = ENV_ARTIFACTS_ROOT)]
    artifacts_root: Option<PathBuf>,
}

impl From<Cli> for RawConfig {
    fn from(cli: Cli) -> Self {
        RawConfig {
            account_id: cli.account_id,
            access_key_id: cli.access_key_id,
            secret_access_key: cli.secret_access_key,
            bucket: cli.bucket,
            project_id: cli.project_id,
            artifacts_root: cli.artifacts_root.filter(|p| !p.as_os_str().is_empty()),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Setup error handling
    if let Err(e) = HookBuilder::default().install() {
        eprintln!("Warning: Failed to install error handler: {}", e);
    }

    // Local runs may keep credentials in .env
    dotenvy::dotenv().ok();

    init_logging();

    let cli = Cli::parse();

    exit_code(handlers::handle_upload(cli.into()).await)
}

/// Any failure maps to exit status 1
fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags_into_raw_config() {
        let cli = Cli::try_parse_from([
            "r2-artifacts",
            "--account-id",
            "acc",
            "--bucket",
            "site",
            "--project-id",
            "myapp",
            "--artifacts-root",
            "out",
        ])
        .unwrap();

        let raw: RawConfig = cli.into();
        assert_eq!(raw.account_id.as_deref(), Some("acc"));
        assert_eq!(raw.bucket.as_deref(), Some("site"));
        assert_eq!(raw.project_id.as_deref(), Some("myapp"));
        assert_eq!(raw.artifacts_root, Some(PathBuf::from("out")));
    }
}
