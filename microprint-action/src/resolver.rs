//! Job resolver
//!
//! Handles resolution of a job name to the job id the Actions API needs.
//! Names are matched exactly; when several jobs share a name the first one
//! listed wins.

use microprint_client::ActionsApi;
use microprint_core::domain::job::Job;
use tracing::{debug, info};

use crate::error::ActionError;

/// Find the first job named exactly `name`
///
/// The comparison is case-sensitive and never matches partially.
pub fn find_job_by_name<'a>(jobs: &'a [Job], name: &str) -> Option<&'a Job> {
    jobs.iter().find(|job| job.name == name)
}

/// Resolve a job name within a workflow run to its id
///
/// # Arguments
/// * `api` - The API used to list the run's jobs
/// * `run_id` - The workflow run to search
/// * `name` - Exact job name
///
/// # Errors
/// Returns an error if:
/// - No job in the run has that name
/// - API call fails
pub async fn resolve_job_id(
    api: &dyn ActionsApi,
    run_id: u64,
    name: &str,
) -> Result<u64, ActionError> {
    let jobs = api.list_run_jobs(run_id).await?;
    debug!("Searching {} job(s) of run {} for '{}'", jobs.len(), run_id, name);

    match find_job_by_name(&jobs, name) {
        Some(job) => {
            info!("Resolved job '{}' to id {}", name, job.id);
            Ok(job.id)
        }
        None => Err(ActionError::JobNotFound {
            name: name.to_string(),
            run_id,
            available: jobs.into_iter().map(|job| job.name).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    fn jobs() -> Vec<Job> {
        vec![Job::new(1, "build"), Job::new(2, "test")]
    }

    #[test]
    fn test_finds_exact_match() {
        let jobs = jobs();
        assert_eq!(find_job_by_name(&jobs, "test").map(|j| j.id), Some(2));
    }

    #[test]
    fn test_no_partial_or_case_insensitive_match() {
        let jobs = jobs();
        assert!(find_job_by_name(&jobs, "tes").is_none());
        assert!(find_job_by_name(&jobs, "Test").is_none());
        assert!(find_job_by_name(&jobs, "test ").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let jobs = vec![Job::new(5, "lint"), Job::new(6, "test"), Job::new(7, "test")];
        assert_eq!(find_job_by_name(&jobs, "test").map(|j| j.id), Some(6));
    }

    #[test]
    fn test_empty_list() {
        assert!(find_job_by_name(&[], "test").is_none());
    }

    #[tokio::test]
    async fn test_resolve_job_id() {
        let api = FakeApi::new(jobs(), "");
        assert_eq!(resolve_job_id(&api, 42, "test").await.unwrap(), 2);
        assert_eq!(api.listed_runs(), vec![42]);
    }

    #[tokio::test]
    async fn test_resolve_unknown_job() {
        let api = FakeApi::new(jobs(), "");
        let err = resolve_job_id(&api, 42, "deploy").await.unwrap_err();

        match err {
            ActionError::JobNotFound {
                name,
                run_id,
                available,
            } => {
                assert_eq!(name, "deploy");
                assert_eq!(run_id, 42);
                assert_eq!(available, ["build", "test"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_propagates_api_failure() {
        let api = FakeApi::failing(503);
        let err = resolve_job_id(&api, 42, "test").await.unwrap_err();
        assert!(matches!(err, ActionError::Client(ref e) if e.is_server_error()));
    }
}
