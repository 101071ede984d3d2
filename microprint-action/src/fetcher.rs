//! Log fetcher
//!
//! Downloads the log of the configured job and, when asked to, keeps a copy
//! of it exactly as the API returned it.

use std::path::Path;

use microprint_client::ActionsApi;
use tracing::info;

use crate::config::Config;
use crate::error::ActionError;
use crate::resolver::resolve_job_id;

/// Fetch the raw log of the job named in `config`
///
/// The returned bytes are the API's body, byte-order mark and escape
/// sequences included. If `config.save_log` is set they are also written to
/// `config.log_file_path()` first.
pub async fn fetch_job_log(api: &dyn ActionsApi, config: &Config) -> Result<Vec<u8>, ActionError> {
    let job_id = resolve_job_id(api, config.run_id, &config.job_name).await?;

    let logs = api.get_job_logs(job_id).await?;
    info!("Downloaded log of job {} ({} bytes)", job_id, logs.len());

    if config.save_log {
        save_log(&config.log_file_path(), &logs).await?;
    }

    Ok(logs)
}

/// Write `bytes` to `path`, replacing any previous content
///
/// The parent directory must already exist.
pub async fn save_log(path: &Path, bytes: &[u8]) -> Result<(), ActionError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| ActionError::SaveLog {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Saved raw log to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, test_config};
    use microprint_client::GitHubClient;
    use microprint_core::domain::job::Job;
    use microprint_core::domain::repository::Token;

    const RAW_LOG: &[u8] = b"\x1b[31mERROR\x1b[0m: failed\n";

    fn api() -> FakeApi {
        FakeApi::new(vec![Job::new(1, "build"), Job::new(2, "test")], RAW_LOG)
    }

    #[tokio::test]
    async fn test_fetches_log_of_named_job() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.save_log = false;
        let api = api();

        let logs = fetch_job_log(&api, &config).await.unwrap();

        assert_eq!(logs, RAW_LOG);
        assert_eq!(api.fetched_logs(), vec![2]);
        assert!(!config.log_file_path().exists());
    }

    #[tokio::test]
    async fn test_saves_raw_log_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        fetch_job_log(&api(), &config).await.unwrap();

        let saved = std::fs::read(config.log_file_path()).unwrap();
        assert_eq!(saved, RAW_LOG);
    }

    #[tokio::test]
    async fn test_saved_log_matches_api_body_exactly() {
        let body: &[u8] = b"\xEF\xBB\xBF2024-01-01T00:00:00Z \x1b[31m\xFFraw\x1b[0m\r\n";
        let mut server = mockito::Server::new_async().await;
        let _jobs = server
            .mock("GET", "/repos/octo-org/octo-repo/actions/runs/42/jobs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total_count":1,"jobs":[{"name":"test","id":7}]}"#)
            .create_async()
            .await;
        let _logs = server
            .mock("GET", "/repos/octo-org/octo-repo/actions/jobs/7/logs")
            .with_status(200)
            .with_header("content-type", "text/plain; charset=utf-8")
            .with_body(body)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let client = GitHubClient::new(
            server.url(),
            config.repository.clone(),
            Token::new("ghp_test"),
        );

        let logs = fetch_job_log(&client, &config).await.unwrap();

        assert_eq!(logs, body);
        assert_eq!(std::fs::read(config.log_file_path()).unwrap(), body);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        std::fs::write(config.log_file_path(), "a much longer stale log from last time\n").unwrap();

        fetch_job_log(&api(), &config).await.unwrap();

        assert_eq!(std::fs::read(config.log_file_path()).unwrap(), RAW_LOG);
    }

    #[tokio::test]
    async fn test_missing_log_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.log_path = dir.path().join("does-not-exist");

        let err = fetch_job_log(&api(), &config).await.unwrap_err();

        assert!(matches!(err, ActionError::SaveLog { .. }));
        assert!(!config.log_path.exists());
    }

    #[tokio::test]
    async fn test_unknown_job_fetches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.job_name = "deploy".to_string();
        let api = api();

        let err = fetch_job_log(&api, &config).await.unwrap_err();

        assert!(matches!(err, ActionError::JobNotFound { .. }));
        assert!(api.fetched_logs().is_empty());
    }
}
