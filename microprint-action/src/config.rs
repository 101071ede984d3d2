//! Action configuration
//!
//! Everything the action needs is passed in through environment variables:
//! the `INPUT_*` variables the runner derives from the step's `with:` block
//! plus the `GITHUB_*` variables every job gets. They are read once at
//! startup into a `Config` that is handed to each stage.

use std::path::PathBuf;

use microprint_client::DEFAULT_API_URL;
use microprint_core::domain::repository::{Repository, Token};
use microprint_render::{RenderMode, output_path};
use thiserror::Error;
use tracing::warn;

pub const REPOSITORY: &str = "INPUT_REPOSITORY";
pub const GITHUB_TOKEN: &str = "INPUT_GITHUB_TOKEN";
pub const JOB_NAME: &str = "INPUT_JOB_NAME";
pub const RUN_ID: &str = "GITHUB_RUN_ID";
pub const LOG_PATH: &str = "INPUT_LOG_PATH";
pub const LOG_FILENAME: &str = "INPUT_LOG_FILENAME";
pub const SAVE_LOG: &str = "INPUT_SAVE_LOG";
pub const MICROPRINT_PATH: &str = "INPUT_MICROPRINT_PATH";
pub const MICROPRINT_FILENAME: &str = "INPUT_MICROPRINT_FILENAME";
pub const MICROPRINT_SCALE: &str = "INPUT_MICROPRINT_SCALE";
pub const MICROPRINT_RENDER_METHOD: &str = "INPUT_MICROPRINT_RENDER_METHOD";
pub const API_URL: &str = "GITHUB_API_URL";

/// Every problem found while loading the configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid configuration: {}", problems.join("; "))]
pub struct ConfigError {
    pub problems: Vec<String>,
}

/// Action configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository hosting the workflow run
    pub repository: Repository,

    /// Credential for API calls
    pub token: Token,

    /// Exact name of the job whose log is rendered
    pub job_name: String,

    /// Workflow run containing the job
    pub run_id: u64,

    /// Directory the raw log is saved into
    pub log_path: PathBuf,

    /// Raw log file name, without extension
    pub log_filename: String,

    /// Whether the raw log is saved at all
    pub save_log: bool,

    /// Directory the microprint is written into
    pub microprint_path: PathBuf,

    /// Microprint file name, without extension
    pub microprint_filename: String,

    /// Pixels per character cell
    pub scale: u32,

    pub render_mode: RenderMode,

    /// API root (e.g., "https://api.github.com")
    pub api_url: String,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Required environment variables:
    /// - INPUT_REPOSITORY (`owner/repo`)
    /// - INPUT_GITHUB_TOKEN
    /// - INPUT_JOB_NAME
    /// - GITHUB_RUN_ID
    /// - INPUT_LOG_PATH, INPUT_LOG_FILENAME (non-blank when the log is saved)
    /// - INPUT_SAVE_LOG (`true` saves the raw log)
    /// - INPUT_MICROPRINT_PATH, INPUT_MICROPRINT_FILENAME
    /// - INPUT_MICROPRINT_SCALE (positive integer)
    /// - INPUT_MICROPRINT_RENDER_METHOD (`svg`, anything else renders PNG)
    ///
    /// Optional:
    /// - GITHUB_API_URL (default: https://api.github.com)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    ///
    /// All variables are inspected before returning, so the error lists
    /// every missing or malformed one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut vars = Vars {
            lookup,
            problems: Vec::new(),
        };

        let repository = vars.required(REPOSITORY).and_then(|value| {
            value
                .parse::<Repository>()
                .map_err(|e| vars.problem(format!("{}: {}", REPOSITORY, e)))
                .ok()
        });
        let token = vars.required(GITHUB_TOKEN).map(Token::new);
        let job_name = vars.required(JOB_NAME);
        let run_id = vars.required(RUN_ID).and_then(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| {
                    vars.problem(format!(
                        "{} must be an unsigned integer, got '{}'",
                        RUN_ID, value
                    ))
                })
                .ok()
        });
        let log_path = vars.path(LOG_PATH);
        let log_filename = vars.present(LOG_FILENAME);
        let save_log = vars.present(SAVE_LOG).map(|value| value == "true");
        // The file name only matters when the log is written
        if save_log == Some(true)
            && log_filename.as_deref().is_some_and(|name| name.trim().is_empty())
        {
            vars.problem(format!("{} cannot be empty when saving the log", LOG_FILENAME));
        }
        let microprint_path = vars.path(MICROPRINT_PATH);
        let microprint_filename = vars.required(MICROPRINT_FILENAME);
        let scale = vars.required(MICROPRINT_SCALE).and_then(|value| {
            parse_scale(&value)
                .map_err(|problem| vars.problem(problem))
                .ok()
        });
        let render_mode = vars.present(MICROPRINT_RENDER_METHOD).map(|value| {
            if !RenderMode::is_recognized_setting(&value) {
                warn!(
                    "Unrecognized render method '{}', rendering a PNG microprint",
                    value
                );
            }
            RenderMode::from_setting(&value)
        });
        let api_url = (vars.lookup)(API_URL)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if let Err(problem) = check_api_url(&api_url) {
            vars.problems.push(problem);
        }

        match (
            repository,
            token,
            job_name,
            run_id,
            log_path,
            log_filename,
            save_log,
            microprint_path,
            microprint_filename,
            scale,
            render_mode,
        ) {
            (
                Some(repository),
                Some(token),
                Some(job_name),
                Some(run_id),
                Some(log_path),
                Some(log_filename),
                Some(save_log),
                Some(microprint_path),
                Some(microprint_filename),
                Some(scale),
                Some(render_mode),
            ) if vars.problems.is_empty() => Ok(Self {
                repository,
                token,
                job_name,
                run_id,
                log_path,
                log_filename,
                save_log,
                microprint_path,
                microprint_filename,
                scale,
                render_mode,
                api_url,
            }),
            _ => Err(ConfigError {
                problems: vars.problems,
            }),
        }
    }

    /// Where the raw log is saved: `{log_path}/{log_filename}.txt`
    pub fn log_file_path(&self) -> PathBuf {
        self.log_path.join(format!("{}.txt", self.log_filename))
    }

    /// Where the microprint is written: `{microprint_path}/{microprint_filename}.svg|.png`
    pub fn microprint_file_path(&self) -> PathBuf {
        output_path(
            &self.microprint_path,
            &self.microprint_filename,
            self.render_mode,
        )
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.job_name.trim().is_empty() {
            problems.push(format!("{} cannot be empty", JOB_NAME));
        }

        if self.save_log && self.log_filename.trim().is_empty() {
            problems.push(format!("{} cannot be empty when saving the log", LOG_FILENAME));
        }

        if self.microprint_filename.trim().is_empty() {
            problems.push(format!("{} cannot be empty", MICROPRINT_FILENAME));
        }

        if self.scale == 0 {
            problems.push(format!("{} must be greater than 0", MICROPRINT_SCALE));
        }

        if let Err(problem) = check_api_url(&self.api_url) {
            problems.push(problem);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError { problems })
        }
    }
}

/// Variable source that records what is wrong instead of stopping early
struct Vars<F> {
    lookup: F,
    problems: Vec<String>,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn problem(&mut self, problem: String) {
        self.problems.push(problem);
    }

    /// A variable that must be set, possibly to an empty value
    fn present(&mut self, key: &str) -> Option<String> {
        let value = (self.lookup)(key);
        if value.is_none() {
            self.problem(format!("{} is not set", key));
        }
        value
    }

    /// A variable that must be set to a non-blank value
    fn required(&mut self, key: &str) -> Option<String> {
        match self.present(key) {
            Some(value) if value.trim().is_empty() => {
                self.problem(format!("{} cannot be empty", key));
                None
            }
            value => value,
        }
    }

    /// A directory; empty means the working directory
    fn path(&mut self, key: &str) -> Option<PathBuf> {
        self.present(key).map(PathBuf::from)
    }
}

fn parse_scale(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(scale) if scale > 0 => Ok(scale),
        _ => Err(format!(
            "{} must be a positive integer, got '{}'",
            MICROPRINT_SCALE, value
        )),
    }
}

fn check_api_url(url: &str) -> Result<(), String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("{} must start with http:// or https://", API_URL))
    }
}
