//! Job-related API endpoints

use crate::GitHubClient;
use crate::error::Result;
use microprint_core::domain::job::Job;
use microprint_core::dto::job::JobList;
use tracing::debug;

impl GitHubClient {
    // =============================================================================
    // Workflow Run Jobs
    // =============================================================================

    /// List the jobs of a workflow run
    ///
    /// Only the first page the API returns is read.
    ///
    /// # Arguments
    /// * `run_id` - The workflow run identifier
    ///
    /// # Returns
    /// The jobs, in the order the API listed them
    pub async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<Job>> {
        let list: JobList = self.get_json(&format!("runs/{}/jobs", run_id)).await?;
        debug!("Run {} has {} job(s)", run_id, list.jobs.len());

        Ok(list.jobs)
    }

    // =============================================================================
    // Job Logs
    // =============================================================================

    /// Get the log of a job
    ///
    /// The API answers with a redirect to short-lived storage; the HTTP
    /// client follows it.
    ///
    /// # Arguments
    /// * `job_id` - The job identifier
    ///
    /// # Returns
    /// The log body byte for byte: byte-order mark, escape sequences and
    /// any invalid UTF-8 included
    pub async fn get_job_logs(&self, job_id: u64) -> Result<Vec<u8>> {
        let logs = self.get_bytes(&format!("jobs/{}/logs", job_id)).await?;
        debug!("Downloaded {} byte(s) of log for job {}", logs.len(), job_id);

        Ok(logs)
    }
}
