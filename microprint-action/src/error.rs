//! Errors raised while producing a microprint

use std::path::PathBuf;

use microprint_client::ClientError;
use microprint_render::RenderError;
use thiserror::Error;

/// Failure of one of the action's stages
#[derive(Debug, Error)]
pub enum ActionError {
    /// No job in the run carries the requested name
    #[error(
        "no job named '{name}' in workflow run {run_id} (available: {})",
        job_names(.available)
    )]
    JobNotFound {
        name: String,
        run_id: u64,
        available: Vec<String>,
    },

    /// An API call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The raw log could not be written
    #[error("failed to save log to {}: {source}", .path.display())]
    SaveLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The microprint could not be rendered
    #[error(transparent)]
    Render(#[from] RenderError),
}

fn job_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
