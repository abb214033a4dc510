use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with a clean environment, run from an empty directory so no
/// `.env` file is picked up
fn r2_artifacts(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("r2-artifacts").unwrap();
    cmd.env_clear().current_dir(dir.path());
    cmd
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    r2_artifacts(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project-id"))
        .stdout(predicate::str::contains("--artifacts-root"));
}

#[test]
fn test_missing_everything_exits_1() {
    let dir = TempDir::new().unwrap();
    r2_artifacts(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Missing required environment variables: CF_ACCOUNT_ID, AWS_ACCESS_KEY_ID, \
             AWS_SECRET_ACCESS_KEY, R2_BUCKET, PROJECT_ID",
        ));
}

#[test]
fn test_partial_env_names_only_missing() {
    let dir = TempDir::new().unwrap();
    r2_artifacts(&dir)
        .env("CF_ACCOUNT_ID", "0123456789abcdef0123456789abcdef")
        .env("AWS_ACCESS_KEY_ID", "key")
        .env("AWS_SECRET_ACCESS_KEY", "secret")
        .env("R2_BUCKET", "site-builds")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Missing required environment variables: PROJECT_ID",
        ))
        .stderr(predicate::str::contains("secret").not());
}

#[test]
fn test_empty_value_is_missing() {
    let dir = TempDir::new().unwrap();
    r2_artifacts(&dir)
        .env("CF_ACCOUNT_ID", "acc")
        .env("AWS_ACCESS_KEY_ID", "key")
        .env("AWS_SECRET_ACCESS_KEY", "s3cr3t")
        .env("R2_BUCKET", "")
        .env("PROJECT_ID", "myapp")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("R2_BUCKET"));
}

#[test]
fn test_flags_satisfy_config_check() {
    let dir = TempDir::new().unwrap();
    // Only the bucket is absent; flags fill in the rest
    r2_artifacts(&dir)
        .args([
            "--account-id",
            "acc",
            "--access-key-id",
            "key",
            "--secret-access-key",
            "s3cr3t",
            "--project-id",
            "myapp",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Missing required environment variables: R2_BUCKET",
        ));
}
