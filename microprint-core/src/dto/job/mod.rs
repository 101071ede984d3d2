//! Job DTOs returned by the Actions API

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;

/// Body of `GET /repos/{owner}/{repo}/actions/runs/{run_id}/jobs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub total_count: Option<u64>,
    pub jobs: Vec<Job>,
}
