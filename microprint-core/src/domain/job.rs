//! Job domain types

use serde::{Deserialize, Serialize};

/// A job within a workflow run, as reported by the Actions API
///
/// Only `id` and `name` are required; the remaining fields are informational
/// and default to `None` when the API omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub run_id: Option<u64>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Job {
    /// Creates a job with only the required fields set
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            run_id: None,
            status: None,
            conclusion: None,
            started_at: None,
            completed_at: None,
            html_url: None,
        }
    }
}

/// Job execution status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
    Waiting,
    Requested,
    Pending,
    #[serde(other)]
    Unknown,
}
