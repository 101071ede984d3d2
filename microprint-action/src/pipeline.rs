//! The action's single pass: fetch, clean, render

use std::path::PathBuf;

use microprint_client::ActionsApi;
use microprint_core::{decode_log, strip_ansi_escapes};
use microprint_render::MicroprintRenderer;
use tracing::info;

use crate::config::Config;
use crate::error::ActionError;
use crate::fetcher::fetch_job_log;

/// Produce the microprint described by `config`
///
/// Stops at the first failing stage. Returns the path of the written image.
pub async fn run(
    config: &Config,
    api: &dyn ActionsApi,
    renderer: &dyn MicroprintRenderer,
) -> Result<PathBuf, ActionError> {
    let raw = fetch_job_log(api, config).await?;

    let clean = strip_ansi_escapes(&decode_log(&raw));
    info!(
        "Stripped escape sequences: {} -> {} bytes",
        raw.len(),
        clean.len()
    );

    let path = config.microprint_file_path();
    renderer.render(&clean, config.render_mode, &path, config.scale)?;
    info!(
        "Wrote {} microprint to {}",
        config.render_mode,
        path.display()
    );

    Ok(path)
}
