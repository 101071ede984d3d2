//! Trait seam over the Actions endpoints
//!
//! The action binary depends on this trait rather than on `GitHubClient`
//! directly so its resolution and fetching logic can run against fakes.

use async_trait::async_trait;
use microprint_core::domain::job::Job;

use crate::GitHubClient;
use crate::error::Result;

/// Read-only view of a repository's workflow jobs
#[async_trait]
pub trait ActionsApi: Send + Sync {
    /// Lists the jobs of a workflow run, in API order
    async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<Job>>;

    /// Downloads the log of a job as the raw bytes the API returned
    async fn get_job_logs(&self, job_id: u64) -> Result<Vec<u8>>;
}

#[async_trait]
impl ActionsApi for GitHubClient {
    async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<Job>> {
        GitHubClient::list_run_jobs(self, run_id).await
    }

    async fn get_job_logs(&self, job_id: u64) -> Result<Vec<u8>> {
        GitHubClient::get_job_logs(self, job_id).await
    }
}
