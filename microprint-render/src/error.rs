//! Error types for microprint rendering

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a microprint
#[derive(Debug, Error)]
pub enum RenderError {
    /// Scale factor of zero
    #[error("microprint scale must be at least 1, got {0}")]
    InvalidScale(u32),

    /// Output dimensions do not fit an image
    #[error("microprint of {width}x{height} pixels is too large")]
    TooLarge { width: u64, height: u64 },

    /// Writing the SVG file failed
    #[error("failed to write microprint to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing the raster image failed
    #[error("failed to write microprint image to {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
