//! Microprint Renderer
//!
//! Turns log text into a microprint: a compact picture of the log in which
//! every line is one thin row, colored by what the line says. Output is
//! either an SVG document or a PNG image.
//!
//! # Example
//!
//! ```no_run
//! use microprint_render::{MicroprintRenderer, Microprinter, RenderMode, output_path};
//! use std::path::Path;
//!
//! let mode = RenderMode::from_setting("svg");
//! let path = output_path(Path::new("/out"), "run1", mode);
//! Microprinter::default()
//!     .render("ERROR: failed\nok", mode, &path, 2)
//!     .expect("render microprint");
//! ```

pub mod error;
pub mod layout;
pub mod raster;
pub mod rules;
pub mod svg;

pub use error::{RenderError, Result};
pub use layout::Layout;
pub use rules::{LineStyle, Rule, RuleSet};

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Output format of a microprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Vector output, `.svg`
    Svg,
    /// PNG output, `.png`
    Raster,
}

impl RenderMode {
    /// Maps a render-method setting to a mode
    ///
    /// Exactly `"svg"` selects `Svg`. Every other value, including the empty
    /// string, selects `Raster`.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "svg" => Self::Svg,
            _ => Self::Raster,
        }
    }

    /// Whether `value` names a mode explicitly rather than falling back
    pub fn is_recognized_setting(value: &str) -> bool {
        matches!(value, "svg" | "png" | "raster")
    }

    /// File extension written for this mode, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Raster => "png",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => f.write_str("svg"),
            Self::Raster => f.write_str("raster"),
        }
    }
}

/// `dir/filename.<ext>` for the given mode
pub fn output_path(dir: &Path, filename: &str, mode: RenderMode) -> PathBuf {
    dir.join(format!("{}.{}", filename, mode.extension()))
}

/// Something that can draw a microprint of a log to a file
pub trait MicroprintRenderer: Send + Sync {
    /// Renders `text` in `mode` to `path`
    ///
    /// # Arguments
    /// * `text` - Sanitized log text
    /// * `mode` - Output format
    /// * `path` - File to create or overwrite
    /// * `scale` - Size of one character cell in pixels, at least 1
    fn render(&self, text: &str, mode: RenderMode, path: &Path, scale: u32) -> Result<()>;
}

/// Renderer backed by this crate's SVG and PNG writers
#[derive(Debug, Clone, Default)]
pub struct Microprinter {
    rules: RuleSet,
}

impl Microprinter {
    /// Creates a renderer using the given coloring rules
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl MicroprintRenderer for Microprinter {
    fn render(&self, text: &str, mode: RenderMode, path: &Path, scale: u32) -> Result<()> {
        let layout = Layout::new(text, &self.rules);
        debug!(
            "Rendering {} row(s) x {} column(s) as {} to {}",
            layout.rows.len(),
            layout.columns,
            mode,
            path.display()
        );

        match mode {
            RenderMode::Svg => {
                svg::render_svg_to_file(&layout, self.rules.default_style(), path, scale)
            }
            RenderMode::Raster => raster::render_raster_to_file(&layout, path, scale),
        }
    }
}
