//! Test doubles shared by the action's unit tests

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use microprint_client::{ActionsApi, ClientError};
use microprint_core::domain::job::Job;
use microprint_core::domain::repository::{Repository, Token};
use microprint_render::RenderMode;

use crate::config::Config;

/// In-memory `ActionsApi` that records the calls made to it
pub struct FakeApi {
    jobs: Vec<Job>,
    log: Vec<u8>,
    failure: Option<u16>,
    listed_runs: Mutex<Vec<u64>>,
    fetched_logs: Mutex<Vec<u64>>,
}

impl FakeApi {
    /// Every run has `jobs`; every job has `log`
    pub fn new(jobs: Vec<Job>, log: impl AsRef<[u8]>) -> Self {
        Self {
            jobs,
            log: log.as_ref().to_vec(),
            failure: None,
            listed_runs: Mutex::new(Vec::new()),
            fetched_logs: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            failure: Some(status),
            ..Self::new(Vec::new(), "")
        }
    }

    pub fn listed_runs(&self) -> Vec<u64> {
        self.listed_runs.lock().unwrap().clone()
    }

    pub fn fetched_logs(&self) -> Vec<u64> {
        self.fetched_logs.lock().unwrap().clone()
    }

    fn check(&self, path: String) -> microprint_client::Result<()> {
        match self.failure {
            Some(status) => Err(ClientError::api_error(path, status, "fake failure")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ActionsApi for FakeApi {
    async fn list_run_jobs(&self, run_id: u64) -> microprint_client::Result<Vec<Job>> {
        self.listed_runs.lock().unwrap().push(run_id);
        self.check(format!("runs/{}/jobs", run_id))?;
        Ok(self.jobs.clone())
    }

    async fn get_job_logs(&self, job_id: u64) -> microprint_client::Result<Vec<u8>> {
        self.fetched_logs.lock().unwrap().push(job_id);
        self.check(format!("jobs/{}/logs", job_id))?;
        Ok(self.log.clone())
    }
}

/// Configuration looking for job "test" in run 42, writing into `dir`
pub fn test_config(dir: &Path) -> Config {
    Config {
        repository: Repository::new("octo-org", "octo-repo"),
        token: Token::new("ghp_test"),
        job_name: "test".to_string(),
        run_id: 42,
        log_path: dir.to_path_buf(),
        log_filename: "job".to_string(),
        save_log: true,
        microprint_path: dir.to_path_buf(),
        microprint_filename: "run1".to_string(),
        scale: 1,
        render_mode: RenderMode::Svg,
        api_url: microprint_client::DEFAULT_API_URL.to_string(),
    }
}
